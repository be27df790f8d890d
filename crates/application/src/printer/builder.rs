use domain::barcode::BarcodeCode;
use domain::label::{LabelData, LabelSettings};
use domain::printer::LabelDocument;

use super::escpos::EscPosBuilder;

/// Builds the label markup handed to the render surface.
///
/// The barcode element only carries the digits; drawing the bars is left to
/// the host's symbology renderer.
pub struct LabelBuilder {
    title: String,
    body: String,
}

impl LabelBuilder {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
        }
    }

    /// Standard shelf label: name, price, barcode
    pub fn for_label(data: &LabelData, settings: &LabelSettings) -> LabelDocument {
        let price = settings.format_price(data.price());
        let commands = EscPosBuilder::new()
            .initialize()
            .align_center()
            .text_line(data.name())
            .text_line(&price)
            .barcode_ean13(data.code())
            .feed(2)
            .cut()
            .build();

        Self::new()
            .title(data.name())
            .text_line("name", data.name())
            .text_line("price", &price)
            .barcode(data.code())
            .build(data.code().clone(), commands)
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn text_line(mut self, class: &str, text: &str) -> Self {
        self.body.push_str(&format!(
            "<div class=\"{}\">{}</div>\n",
            escape_html(class),
            escape_html(text)
        ));
        self
    }

    pub fn barcode(mut self, code: &BarcodeCode) -> Self {
        self.body.push_str(&format!(
            "<svg class=\"barcode\" data-format=\"EAN13\" data-value=\"{code}\"></svg>\n\
             <div class=\"digits\">{code}</div>\n"
        ));
        self
    }

    pub fn build(self, code: BarcodeCode, commands: Vec<u8>) -> LabelDocument {
        let markup = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(&self.title),
            self.body
        );
        LabelDocument::new(self.title, code, markup, commands)
    }
}

impl Default for LabelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

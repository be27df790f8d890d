use serde::{Deserialize, Serialize};

use crate::barcode::BarcodeCode;

/// A rendered label in the forms the surfaces consume: HTML markup for
/// surfaces that lay out pages, ESC/POS commands for raw printers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDocument {
    pub title: String,
    pub code: BarcodeCode,
    pub markup: String,
    pub commands: Vec<u8>,
}

impl LabelDocument {
    pub fn new(
        title: impl Into<String>,
        code: BarcodeCode,
        markup: impl Into<String>,
        commands: Vec<u8>,
    ) -> Self {
        Self {
            title: title.into(),
            code,
            markup: markup.into(),
            commands,
        }
    }
}

use domain::barcode::BarcodeCode;

/// ESC/POS command stream for raw (port 9100) label printers
pub struct EscPosBuilder {
    buffer: Vec<u8>,
}

impl EscPosBuilder {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn initialize(mut self) -> Self {
        // ESC @: Initialize printer
        self.buffer.extend_from_slice(&[0x1B, 0x40]);
        self
    }

    pub fn align_center(mut self) -> Self {
        // ESC a n: Align (0: Left, 1: Center, 2: Right)
        self.buffer.extend_from_slice(&[0x1B, 0x61, 0x01]);
        self
    }

    pub fn text_line(mut self, text: &str) -> Self {
        self.buffer.extend_from_slice(text.as_bytes());
        self.buffer.push(0x0A); // LF
        self
    }

    /// EAN-13 symbol with the digits printed below it
    pub fn barcode_ean13(mut self, code: &BarcodeCode) -> Self {
        // GS H 2: HRI characters below the bars
        self.buffer.extend_from_slice(&[0x1D, 0x48, 0x02]);
        // GS h n: bar height in dots
        self.buffer.extend_from_slice(&[0x1D, 0x68, 80]);
        // GS k m n d1..dn: m = 67 (EAN13, length-prefixed form)
        let digits = code.as_str().as_bytes();
        self.buffer.extend_from_slice(&[0x1D, 0x6B, 67, digits.len() as u8]);
        self.buffer.extend_from_slice(digits);
        self.buffer.push(0x0A);
        self
    }

    pub fn feed(mut self, n: u8) -> Self {
        // ESC d n: Print and feed n lines
        self.buffer.extend_from_slice(&[0x1B, 0x64, n]);
        self
    }

    pub fn cut(mut self) -> Self {
        // GS V 66 0: Feed to cut position and cut
        self.buffer.extend_from_slice(&[0x1D, 0x56, 66, 0]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

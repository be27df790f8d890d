//! Application layer - Use cases and business workflows

pub mod barcode;
pub mod printer;

pub use barcode::{BarcodeService, CodeSource};
pub use printer::{PrintError, PrintOrchestrator, PrintQueue};

//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Value Objects (BarcodeIdentity, BarcodeCode, LabelData)
//! - The code generator (rolling hash + weighted checksum)
//! - Print job lifecycle state
//! - Render surface interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod barcode;
pub mod error;
pub mod label;
pub mod printer;

// Re-export commonly used types
pub use barcode::{BarcodeCode, BarcodeIdentity, generate_code};
pub use error::DomainError;
pub use label::{LabelData, LabelSettings};
pub use printer::{PrintJob, PrintJobState};

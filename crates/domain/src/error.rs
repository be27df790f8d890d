use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid barcode: {0}")]
    InvalidBarcode(String),

    #[error("Invalid label: {0}")]
    InvalidLabel(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;

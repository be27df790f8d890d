use domain::DomainError;
use domain::barcode::{BarcodeCode, BarcodeIdentity, generate_code};
use domain::label::LabelData;
use tracing::debug;

/// Where the code printed on a label comes from
#[derive(Debug, Clone, PartialEq)]
pub enum CodeSource {
    /// Derive from the product/vendor pair
    Identity(BarcodeIdentity),
    /// Code already assigned elsewhere; must pass checksum validation
    Supplied(String),
}

/// Resolves codes and assembles label payloads for the print workflow
pub struct BarcodeService;

impl BarcodeService {
    pub fn resolve(source: &CodeSource) -> Result<BarcodeCode, DomainError> {
        match source {
            CodeSource::Identity(identity) => {
                let code = generate_code(identity);
                debug!(identity = %identity, code = %code, "Generated barcode");
                Ok(code)
            }
            CodeSource::Supplied(raw) => BarcodeCode::parse(raw.as_str()),
        }
    }

    pub fn label(
        source: &CodeSource,
        name: impl Into<String>,
        price: f64,
    ) -> Result<LabelData, DomainError> {
        let code = Self::resolve(source)?;
        LabelData::new(code, name, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_source() {
        let source = CodeSource::Identity(BarcodeIdentity::new("abc123", "v1"));
        let code = BarcodeService::resolve(&source).unwrap();
        assert_eq!(code.as_str(), "0011135808409");
    }

    #[test]
    fn test_supplied_source_is_validated() {
        let ok = CodeSource::Supplied("0001049410638".to_string());
        assert!(BarcodeService::resolve(&ok).is_ok());

        let bad = CodeSource::Supplied("0001049410639".to_string());
        assert!(matches!(
            BarcodeService::resolve(&bad),
            Err(DomainError::InvalidBarcode(_))
        ));
    }

    #[test]
    fn test_label_from_identity() {
        let source = CodeSource::Identity(BarcodeIdentity::new("p1", "v1"));
        let label = BarcodeService::label(&source, "Coffee", 4.75).unwrap();
        assert_eq!(label.code().as_str(), "0001049410638");
        assert_eq!(label.name(), "Coffee");
    }

    #[test]
    fn test_label_rejects_bad_price() {
        let source = CodeSource::Identity(BarcodeIdentity::new("p1", "v1"));
        assert!(matches!(
            BarcodeService::label(&source, "Coffee", f64::NAN),
            Err(DomainError::InvalidLabel(_))
        ));
    }
}

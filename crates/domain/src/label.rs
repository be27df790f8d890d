use crate::barcode::BarcodeCode;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Payload rendered onto a physical label.
///
/// Deserialization goes through [`LabelData::new`], so a label read from JSON
/// obeys the same price rule as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LabelRecord")]
pub struct LabelData {
    code: BarcodeCode,
    name: String,
    price: f64,
}

/// Unvalidated wire shape of [`LabelData`]
#[derive(Deserialize)]
struct LabelRecord {
    code: BarcodeCode,
    name: String,
    price: f64,
}

impl TryFrom<LabelRecord> for LabelData {
    type Error = DomainError;

    fn try_from(record: LabelRecord) -> Result<Self> {
        Self::new(record.code, record.name, record.price)
    }
}

impl LabelData {
    pub fn new(code: BarcodeCode, name: impl Into<String>, price: f64) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidLabel(format!(
                "price must be a finite non-negative number, got {price}"
            )));
        }

        Ok(Self {
            code,
            name: name.into(),
            price,
        })
    }

    pub fn code(&self) -> &BarcodeCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Display settings supplied by the business settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "KWD".to_string()
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl LabelSettings {
    /// Price with three decimals and the currency suffix, e.g. `12.500 KWD`
    pub fn format_price(&self, price: f64) -> String {
        if self.currency.is_empty() {
            format!("{:.3}", price)
        } else {
            format!("{:.3} {}", price, self.currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> BarcodeCode {
        BarcodeCode::parse("0011135808409").unwrap()
    }

    #[test]
    fn test_format_price() {
        let settings = LabelSettings {
            currency: "USD".to_string(),
        };
        assert_eq!(settings.format_price(12.5), "12.500 USD");
        assert_eq!(settings.format_price(0.0), "0.000 USD");
        assert_eq!(settings.format_price(3.14159), "3.142 USD");
    }

    #[test]
    fn test_format_price_without_currency() {
        let settings = LabelSettings {
            currency: String::new(),
        };
        assert_eq!(settings.format_price(7.0), "7.000");
    }

    #[test]
    fn test_label_rejects_invalid_price() {
        assert!(LabelData::new(code(), "Tea", f64::NAN).is_err());
        assert!(LabelData::new(code(), "Tea", f64::INFINITY).is_err());
        assert!(LabelData::new(code(), "Tea", -1.0).is_err());
    }

    #[test]
    fn test_label_valid() {
        let label = LabelData::new(code(), "Tea", 1.25).unwrap();
        assert_eq!(label.name(), "Tea");
        assert_eq!(label.code().as_str(), "0011135808409");
        assert_eq!(label.price(), 1.25);
    }

    #[test]
    fn test_deserialize_validates_price() {
        let negative: std::result::Result<LabelData, _> = serde_json::from_str(
            r#"{"code":"0011135808409","name":"Tea","price":-5.0}"#,
        );
        let err = negative.unwrap_err().to_string();
        assert!(err.contains("price must be a finite non-negative number"), "{err}");

        let bad_code: std::result::Result<LabelData, _> =
            serde_json::from_str(r#"{"code":"0011135808408","name":"Tea","price":5.0}"#);
        assert!(bad_code.is_err());
    }

    #[test]
    fn test_serde_keeps_valid_label() {
        let label = LabelData::new(code(), "Tea", 1.5).unwrap();
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"code":"0011135808409","name":"Tea","price":1.5}"#);

        let back: LabelData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, label);
    }
}

use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

use super::generator::{CODE_LEN, PAYLOAD_LEN, checksum_digit};

/// Value object for a 13-digit code: 12 payload digits and a check digit.
///
/// Rules:
/// - Exactly 13 ASCII digits
/// - Last digit is the weighted mod-10 checksum of the first 12
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BarcodeCode(String);

impl BarcodeCode {
    /// Validate a caller-supplied code
    pub fn parse(code: impl Into<String>) -> Result<Self> {
        let code = code.into();

        if code.len() != CODE_LEN {
            return Err(DomainError::InvalidBarcode(format!(
                "expected {} digits, got {}",
                CODE_LEN,
                code.len()
            )));
        }

        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidBarcode(format!(
                "code {code} must contain only digits"
            )));
        }

        let mut payload = [0u8; PAYLOAD_LEN];
        for (slot, b) in payload.iter_mut().zip(code.bytes()) {
            *slot = b - b'0';
        }
        let expected = checksum_digit(&payload);
        let actual = code.as_bytes()[PAYLOAD_LEN] - b'0';
        if expected != actual {
            return Err(DomainError::InvalidBarcode(format!(
                "check digit mismatch for {code}: expected {expected}, got {actual}"
            )));
        }

        Ok(Self(code))
    }

    /// Only for digits produced by the generator, which are valid by construction
    pub(crate) fn from_trusted(code: String) -> Self {
        debug_assert_eq!(code.len(), CODE_LEN);
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12 hash-derived digits
    pub fn payload(&self) -> &str {
        &self.0[..PAYLOAD_LEN]
    }

    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[PAYLOAD_LEN] - b'0'
    }
}

impl std::fmt::Display for BarcodeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BarcodeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BarcodeCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<BarcodeCode> for String {
    fn from(code: BarcodeCode) -> Self {
        code.0
    }
}

use serde::{Deserialize, Serialize};

/// Separator placed between product and vendor ids when building the hash key
pub const KEY_SEPARATOR: char = '-';

/// Identity tuple that seeds code generation.
///
/// Ids are kept verbatim: trimming or case folding would change the codes
/// already printed on shelves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarcodeIdentity {
    product_id: String,
    vendor_id: String,
}

impl BarcodeIdentity {
    pub fn new(product_id: impl Into<String>, vendor_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            vendor_id: vendor_id.into(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    /// Key string fed to the rolling hash, e.g. `abc123-v1`
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.product_id.len() + self.vendor_id.len() + 1);
        key.push_str(&self.product_id);
        key.push(KEY_SEPARATOR);
        key.push_str(&self.vendor_id);
        key
    }
}

impl std::fmt::Display for BarcodeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

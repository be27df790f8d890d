mod code;
mod generator;
mod identity;

pub use code::BarcodeCode;
pub use generator::{CODE_LEN, PAYLOAD_LEN, checksum_digit, generate_code, identity_hash};
pub use identity::BarcodeIdentity;

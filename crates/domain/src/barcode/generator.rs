use super::code::BarcodeCode;
use super::identity::BarcodeIdentity;

/// Number of hash-derived digits at the front of a code
pub const PAYLOAD_LEN: usize = 12;
/// Payload plus the trailing check digit
pub const CODE_LEN: usize = PAYLOAD_LEN + 1;

const HASH_MULTIPLIER: i32 = 31;

/// Derive the 13-digit code for an identity.
///
/// Total and deterministic: the same identity always maps to the same code.
/// Distinct identities may collide in the 32-bit hash space; collisions are
/// not detected here.
pub fn generate_code(identity: &BarcodeIdentity) -> BarcodeCode {
    let hash = identity_hash(&identity.key());
    let payload = payload_from_hash(hash);
    let check = checksum_digit(&payload);

    let mut digits = String::with_capacity(CODE_LEN);
    digits.extend(payload.iter().map(|d| char::from(b'0' + d)));
    digits.push(char::from(b'0' + check));

    BarcodeCode::from_trusted(digits)
}

/// Polynomial rolling hash over UTF-16 code units with i32 wrap-around.
///
/// Codes printed before this crate existed were produced with exactly these
/// overflow semantics, so the arithmetic must stay wrapping i32.
pub fn identity_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

/// Weighted mod-10 check digit: weight 1 at even positions, 3 at odd ones.
///
/// `payload` holds digit values (0..=9), not ASCII bytes.
pub fn checksum_digit(payload: &[u8; PAYLOAD_LEN]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            u32::from(d) * weight
        })
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}

fn payload_from_hash(hash: i32) -> [u8; PAYLOAD_LEN] {
    // unsigned_abs: i32::MIN has no positive i32 counterpart
    let text = format!("{:0>width$}", hash.unsigned_abs(), width = PAYLOAD_LEN);

    let mut payload = [0u8; PAYLOAD_LEN];
    for (slot, byte) in payload.iter_mut().zip(text.bytes()) {
        *slot = byte - b'0';
    }
    payload
}

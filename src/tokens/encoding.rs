//! Textual encodings for random bytes.

use uuid::Uuid;

/// Symbols used by random strings, indexed by `byte % 64`.
pub const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-";

/// Maps each byte to a decimal digit (`byte % 10`).
#[must_use]
pub fn decimal_digits(bytes: &[u8]) -> String {
    bytes.iter().map(|b| char::from(b'0' + b % 10)).collect()
}

/// Maps each byte to a symbol of [`ALPHABET`].
#[must_use]
pub fn alphabet_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| char::from(ALPHABET[usize::from(b % 64)])).collect()
}

/// Stamps the version-4 and RFC 4122 variant bits onto `bytes` and renders
/// the canonical lowercase `8-4-4-4-12` form.
#[must_use]
pub fn uuid_v4(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes).hyphenated().to_string()
}

//! Reversible obfuscation applied to `key` values in API responses.
//!
//! This is a presentation concern, not a security boundary: the point is to
//! avoid printing raw credential values verbatim in response bodies and any
//! logs derived from them. Stored data is never obfuscated, and `code` values
//! are never touched.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode a plaintext key value for inclusion in a response body.
///
/// Standard-alphabet base64 of the UTF-8 bytes. Deterministic and reversible.
pub fn encode(plaintext: &str) -> String {
    STANDARD.encode(plaintext.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_standard_base64() {
        assert_eq!(encode("abc"), "YWJj");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn round_trips() {
        let original = "sk-live-9f8e7d6c";
        let decoded = STANDARD.decode(encode(original)).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), original);
    }
}

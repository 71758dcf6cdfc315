//! Request signing for the iPaymu API

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// HTTP method bound into every canonical string.
///
/// The gateway signs all current endpoints as POST; the method is a protocol
/// constant, not an input.
const SIGNED_METHOD: &str = "POST";

/// Compute the request signature for a serialized JSON body.
///
/// The canonical string is `POST:{virtual_account}:{body_hash}:{api_key}`
/// where `body_hash` is the lowercase hex SHA-256 of the body bytes. The
/// signature is the hex-encoded HMAC-SHA256 of that string keyed by the API
/// key. Deterministic: identical inputs always produce identical output, so
/// a retried request re-signs to the same value.
pub fn generate_signature(body: &[u8], virtual_account: &str, api_key: &str) -> String {
    let string_to_sign = string_to_sign(body, virtual_account, api_key);

    let mut mac = HmacSha256::new_from_slice(api_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(string_to_sign.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Build the canonical string-to-sign for a request body
fn string_to_sign(body: &[u8], virtual_account: &str, api_key: &str) -> String {
    let body_hash = hex::encode(Sha256::digest(body));
    format!("{SIGNED_METHOD}:{virtual_account}:{body_hash}:{api_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference digest generated from the upstream implementation.
    const REFERENCE_SIGNATURE: &str =
        "f8eab28a010d0107d3bbdfc2bc11595b790b54c745206874ab0ad47411fb713a";

    #[test]
    fn test_signature_matches_reference_vector() {
        let signature = generate_signature(br#"{"account":"123"}"#, "123", "secret");
        assert_eq!(signature, REFERENCE_SIGNATURE);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = generate_signature(br#"{"account":"123"}"#, "123", "secret");
        let b = generate_signature(br#"{"account":"123"}"#, "123", "secret");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_any_input() {
        let base = generate_signature(br#"{"account":"123"}"#, "123", "secret");

        let other_body = generate_signature(br#"{"account":"124"}"#, "123", "secret");
        let other_account = generate_signature(br#"{"account":"123"}"#, "456", "secret");
        let other_key = generate_signature(br#"{"account":"123"}"#, "123", "secret2");

        assert_ne!(base, other_body);
        assert_ne!(base, other_account);
        assert_ne!(base, other_key);
    }

    #[test]
    fn test_string_to_sign_layout() {
        let canonical = string_to_sign(br#"{"account":"123"}"#, "123", "secret");
        assert_eq!(
            canonical,
            "POST:123:68f1d2bfbecc800445321fd6f22c9b80c700d2bdba838a44b6e4260d693bf311:secret"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = generate_signature(b"{}", "1179000899", "api-key");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

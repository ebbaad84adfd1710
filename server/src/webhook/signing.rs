//! Webhook Signature Verification
//!
//! LINE signs each webhook delivery with HMAC-SHA256 over the raw request
//! body, base64-encoded into the `X-Line-Signature` header.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload with HMAC-SHA256 and return the base64-encoded signature.
pub fn sign_payload(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Verify a signature header against a payload.
pub fn verify_signature(secret: &str, payload: &[u8], signature: &str) -> bool {
    let expected = sign_payload(secret, payload);
    // Constant-time comparison
    expected.len() == signature.len()
        && expected
            .as_bytes()
            .iter()
            .zip(signature.as_bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

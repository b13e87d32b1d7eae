//! Webhook signature verification.
//!
//! LINE signs every webhook delivery: `x-line-signature` carries the
//! base64-encoded HMAC-SHA256 of the raw request body, keyed by the channel
//! secret. Verification must run on the raw bytes before any JSON parsing.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verify `signature` (base64) against `body` using `channel_secret`.
///
/// The comparison is constant-time via `Mac::verify_slice`. Any malformed
/// input (bad base64, wrong length) counts as a mismatch.
pub fn validate_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = BASE64.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(channel_secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

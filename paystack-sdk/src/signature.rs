//! Webhook signature algorithm and verification.
//!
//! Paystack signs every webhook body with HMAC-SHA512 keyed by the
//! integration's secret key and sends the lowercase hex digest in a header:
//!
//! ```text
//! x-paystack-signature: {hex(HMAC-SHA512(body, secret_key))}
//! ```

use ring::hmac;

/// Header name carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Errors produced by signature operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("signature header is empty")]
    Empty,
    #[error("invalid hex encoding")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid signature")]
    SignatureMismatch,
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

fn key(secret: &[u8]) -> hmac::Key {
    hmac::Key::new(hmac::HMAC_SHA512, secret)
}

/// Compute the `x-paystack-signature` value for `body`.
pub fn sign_body(body: &[u8], secret: &[u8]) -> String {
    hex::encode(hmac::sign(&key(secret), body).as_ref())
}

/// Check `header_value` against `body` in constant time.
///
/// Surrounding whitespace and upper-case hex digits are accepted.
pub fn verify_signature(
    header_value: &str,
    body: &[u8],
    secret: &[u8],
) -> Result<(), SignatureError> {
    let header_value = header_value.trim();
    if header_value.is_empty() {
        return Err(SignatureError::Empty);
    }
    let signature = hex::decode(header_value)?;
    hmac::verify(&key(secret), body, &signature)?;
    Ok(())
}

//! Webhook verification helper.
//!
//! Convenience wrapper around [`verify_signature`] for incoming Paystack
//! webhooks.

use serde::de::DeserializeOwned;

use crate::objects::webhook::WebhookEvent;
use crate::signature::{SignatureError, verify_signature};

/// Verify and deserialize an incoming Paystack webhook.
///
/// * `signature_header` – value of the `x-paystack-signature` header.
/// * `body` – raw request body, exactly as received.
/// * `secret_key` – the integration secret key.
///
/// # Example
///
/// ```ignore
/// use paystack_sdk::client::verify_webhook;
/// use paystack_sdk::objects::transaction::Transaction;
///
/// let event = verify_webhook::<Transaction>(signature_header, &body, secret_key)?;
/// if event.event == paystack_sdk::objects::webhook::events::CHARGE_SUCCESS {
///     fulfil(event.data.reference);
/// }
/// ```
pub fn verify_webhook<T: DeserializeOwned>(
    signature_header: &str,
    body: &[u8],
    secret_key: &str,
) -> Result<WebhookEvent<T>, SignatureError> {
    verify_signature(signature_header, body, secret_key.as_bytes())?;
    Ok(serde_json::from_slice(body)?)
}

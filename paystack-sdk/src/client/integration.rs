//! Integration settings.

use super::{Client, ClientError, Response};
use crate::params::Payload;

const SESSION_TIMEOUT_PATH: &str = "/integration/payment_session_timeout";

/// Typed HTTP client for `/integration`.
#[derive(Debug, Clone)]
pub struct Integration {
    client: Client,
}

impl Integration {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /integration/payment_session_timeout`.
    pub async fn payment_session_timeout(&self) -> Result<Response, ClientError> {
        self.client.get(SESSION_TIMEOUT_PATH).await
    }

    /// `PUT /integration/payment_session_timeout` – seconds before a
    /// checkout session expires; `0` disables the timeout.
    pub async fn update_payment_session_timeout(
        &self,
        timeout: u32,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("timeout", timeout);
        self.client.put(SESSION_TIMEOUT_PATH, &payload).await
    }
}

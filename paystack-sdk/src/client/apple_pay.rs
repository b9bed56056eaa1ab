//! Apple Pay domain registration.

use super::{Client, ClientError, Response};
use crate::params::Payload;

/// Typed HTTP client for `/apple-pay/domain`.
#[derive(Debug, Clone)]
pub struct ApplePay {
    client: Client,
}

impl ApplePay {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /apple-pay/domain`.
    pub async fn register_domain(&self, domain: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("domainName", domain);
        self.client.post("/apple-pay/domain", &payload).await
    }

    /// `GET /apple-pay/domain`.
    pub async fn list_domains(&self) -> Result<Response, ClientError> {
        self.client.get("/apple-pay/domain").await
    }

    /// `DELETE /apple-pay/domain`.
    pub async fn unregister_domain(&self, domain: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("domainName", domain);
        self.client
            .delete_with_body("/apple-pay/domain", &payload)
            .await
    }
}

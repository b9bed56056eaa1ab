//! Refunds API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/refund`.
#[derive(Debug, Clone)]
pub struct Refunds {
    client: Client,
}

impl Refunds {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /refund` – `transaction` is the id or reference. Omit `amount`
    /// for a full refund.
    pub async fn create(
        &self,
        transaction: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("transaction", transaction)
            .apply(params);
        self.client.post("/refund", &payload).await
    }

    /// `GET /refund`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/refund", query).await
    }

    /// `GET /refund/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client.get(&format!("/refund/{}", segment(id))).await
    }
}

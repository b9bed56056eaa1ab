//! Subscriptions API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/subscription`.
#[derive(Debug, Clone)]
pub struct Subscriptions {
    client: Client,
}

impl Subscriptions {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /subscription` – subscribe `customer` (email or code) to
    /// `plan`.
    pub async fn create(
        &self,
        customer: &str,
        plan: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("customer", customer)
            .set("plan", plan)
            .apply(params);
        self.client.post("/subscription", &payload).await
    }

    /// `GET /subscription`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/subscription", query).await
    }

    /// `GET /subscription/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/subscription/{}", segment(id_or_code)))
            .await
    }

    /// `POST /subscription/enable`.
    pub async fn enable(&self, code: &str, email_token: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("code", code).set("token", email_token);
        self.client.post("/subscription/enable", &payload).await
    }

    /// `POST /subscription/disable`.
    pub async fn disable(&self, code: &str, email_token: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("code", code).set("token", email_token);
        self.client.post("/subscription/disable", &payload).await
    }

    /// `GET /subscription/{code}/manage/link` – link the customer can use to
    /// update their card.
    pub async fn generate_update_link(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/subscription/{}/manage/link", segment(code)))
            .await
    }

    /// `POST /subscription/{code}/manage/email` – email that link to the
    /// customer.
    pub async fn send_update_link(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .post_empty(&format!("/subscription/{}/manage/email", segment(code)))
            .await
    }
}

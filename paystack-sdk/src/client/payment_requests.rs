//! Payment Requests API (invoices).

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/paymentrequest`.
#[derive(Debug, Clone)]
pub struct PaymentRequests {
    client: Client,
}

impl PaymentRequests {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /paymentrequest`.
    pub async fn create(
        &self,
        customer: &str,
        amount: i64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("customer", customer)
            .set("amount", amount)
            .apply(params);
        self.client.post("/paymentrequest", &payload).await
    }

    /// `GET /paymentrequest`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/paymentrequest", query).await
    }

    /// `GET /paymentrequest/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/paymentrequest/{}", segment(id_or_code)))
            .await
    }

    /// `GET /paymentrequest/verify/{code}`.
    pub async fn verify(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/paymentrequest/verify/{}", segment(code)))
            .await
    }

    /// `POST /paymentrequest/notify/{code}` – send the invoice to the
    /// customer.
    pub async fn send_notification(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .post_empty(&format!("/paymentrequest/notify/{}", segment(code)))
            .await
    }

    /// `GET /paymentrequest/totals`.
    pub async fn totals(&self) -> Result<Response, ClientError> {
        self.client.get("/paymentrequest/totals").await
    }

    /// `POST /paymentrequest/finalize/{code}` – finalize a draft.
    pub async fn finalize(
        &self,
        code: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .post(&format!("/paymentrequest/finalize/{}", segment(code)), &payload)
            .await
    }

    /// `PUT /paymentrequest/{id_or_code}`.
    pub async fn update(
        &self,
        id_or_code: impl Display,
        customer: &str,
        amount: i64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("customer", customer)
            .set("amount", amount)
            .apply(params);
        self.client
            .put(&format!("/paymentrequest/{}", segment(id_or_code)), &payload)
            .await
    }

    /// `POST /paymentrequest/archive/{code}`.
    pub async fn archive(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .post_empty(&format!("/paymentrequest/archive/{}", segment(code)))
            .await
    }
}

//! Transactions API.
//!
//! Amounts are always in the currency's subunit (kobo for NGN, pesewas for
//! GHS, cents for ZAR/USD).

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/transaction`.
#[derive(Debug, Clone)]
pub struct Transactions {
    client: Client,
}

impl Transactions {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /transaction/initialize` – start a checkout and get an
    /// authorization URL for the customer.
    pub async fn initialize(
        &self,
        email: &str,
        amount: i64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("email", email)
            .set("amount", amount)
            .apply(params);
        self.client.post("/transaction/initialize", &payload).await
    }

    /// `GET /transaction/verify/{reference}` – confirm the status of a
    /// transaction.
    pub async fn verify(&self, reference: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transaction/verify/{}", segment(reference)))
            .await
    }

    /// `GET /transaction` – list transactions.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/transaction", query).await
    }

    /// `GET /transaction/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transaction/{}", segment(id)))
            .await
    }

    /// `POST /transaction/charge_authorization` – charge a reusable
    /// authorization without customer interaction.
    pub async fn charge_authorization(
        &self,
        email: &str,
        amount: i64,
        authorization_code: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("email", email)
            .set("amount", amount)
            .set("authorization_code", authorization_code)
            .apply(params);
        self.client
            .post("/transaction/charge_authorization", &payload)
            .await
    }

    /// `GET /transaction/timeline/{id_or_reference}`.
    pub async fn timeline(&self, id_or_reference: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transaction/timeline/{}", segment(id_or_reference)))
            .await
    }

    /// `GET /transaction/totals` – total amount received.
    pub async fn totals(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/transaction/totals", query).await
    }

    /// `GET /transaction/export` – CSV export link.
    pub async fn export(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/transaction/export", query).await
    }

    /// `POST /transaction/partial_debit` – debit whatever is available on
    /// an authorization, up to `amount`.
    pub async fn partial_debit(
        &self,
        authorization_code: &str,
        currency: impl Into<String>,
        amount: i64,
        email: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("authorization_code", authorization_code)
            .set("currency", currency.into())
            .set("amount", amount)
            .set("email", email)
            .apply(params);
        self.client
            .post("/transaction/partial_debit", &payload)
            .await
    }
}

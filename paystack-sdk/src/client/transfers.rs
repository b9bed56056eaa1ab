//! Transfers API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment, to_json};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/transfer`.
#[derive(Debug, Clone)]
pub struct Transfers {
    client: Client,
}

impl Transfers {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /transfer` – send `amount` from `source` (always `balance`
    /// today) to a recipient code.
    pub async fn initiate(
        &self,
        source: &str,
        amount: i64,
        recipient: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("source", source)
            .set("amount", amount)
            .set("recipient", recipient)
            .apply(params);
        self.client.post("/transfer", &payload).await
    }

    /// `POST /transfer/finalize_transfer` – complete a transfer that is
    /// waiting for OTP.
    pub async fn finalize(&self, transfer_code: &str, otp: &str) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("transfer_code", transfer_code)
            .set("otp", otp);
        self.client
            .post("/transfer/finalize_transfer", &payload)
            .await
    }

    /// `POST /transfer/bulk` – each entry of `transfers` carries `amount`,
    /// `recipient` and optionally `reference`/`reason`.
    pub async fn bulk_initiate(
        &self,
        source: &str,
        transfers: impl IntoIterator<Item = Payload>,
    ) -> Result<Response, ClientError> {
        let transfers: Vec<Payload> = transfers.into_iter().collect();
        let payload = Payload::new()
            .set("source", source)
            .set("transfers", to_json(&transfers)?);
        self.client.post("/transfer/bulk", &payload).await
    }

    /// `GET /transfer`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/transfer", query).await
    }

    /// `GET /transfer/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transfer/{}", segment(id_or_code)))
            .await
    }

    /// `GET /transfer/verify/{reference}`.
    pub async fn verify(&self, reference: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transfer/verify/{}", segment(reference)))
            .await
    }
}

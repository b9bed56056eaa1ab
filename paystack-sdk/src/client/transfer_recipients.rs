//! Transfer Recipients API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/transferrecipient`.
#[derive(Debug, Clone)]
pub struct TransferRecipients {
    client: Client,
}

impl TransferRecipients {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /transferrecipient`.
    ///
    /// `recipient_type` is `nuban`, `ghipss`, `mobile_money`, `basa` or
    /// `authorization`.
    pub async fn create(
        &self,
        recipient_type: &str,
        name: &str,
        account_number: &str,
        bank_code: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("type", recipient_type)
            .set("name", name)
            .set("account_number", account_number)
            .set("bank_code", bank_code)
            .apply(params);
        self.client.post("/transferrecipient", &payload).await
    }

    /// `POST /transferrecipient/bulk` – each entry of `batch` is one
    /// recipient object.
    pub async fn bulk_create(
        &self,
        batch: impl IntoIterator<Item = Payload>,
    ) -> Result<Response, ClientError> {
        let batch: Vec<Payload> = batch.into_iter().collect();
        let payload = Payload::new().set("batch", super::to_json(&batch)?);
        self.client.post("/transferrecipient/bulk", &payload).await
    }

    /// `GET /transferrecipient`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/transferrecipient", query).await
    }

    /// `GET /transferrecipient/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/transferrecipient/{}", segment(id_or_code)))
            .await
    }

    /// `PUT /transferrecipient/{id_or_code}`.
    pub async fn update(
        &self,
        id_or_code: impl Display,
        name: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("name", name).apply(params);
        self.client
            .put(&format!("/transferrecipient/{}", segment(id_or_code)), &payload)
            .await
    }

    /// `DELETE /transferrecipient/{id_or_code}` – the recipient is marked
    /// inactive, not erased.
    pub async fn delete(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .delete(&format!("/transferrecipient/{}", segment(id_or_code)))
            .await
    }
}

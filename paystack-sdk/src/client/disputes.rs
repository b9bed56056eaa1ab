//! Disputes API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/dispute`.
#[derive(Debug, Clone)]
pub struct Disputes {
    client: Client,
}

impl Disputes {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /dispute`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/dispute", query).await
    }

    /// `GET /dispute/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client.get(&format!("/dispute/{}", segment(id))).await
    }

    /// `GET /dispute/transaction/{id}` – disputes on one transaction.
    pub async fn list_for_transaction(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/dispute/transaction/{}", segment(id)))
            .await
    }

    /// `PUT /dispute/{id}`.
    pub async fn update(
        &self,
        id: impl Display,
        refund_amount: i64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("refund_amount", refund_amount)
            .apply(params);
        self.client
            .put(&format!("/dispute/{}", segment(id)), &payload)
            .await
    }

    /// `POST /dispute/{id}/evidence`.
    pub async fn add_evidence(
        &self,
        id: impl Display,
        customer_email: &str,
        customer_name: &str,
        customer_phone: &str,
        service_details: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("customer_email", customer_email)
            .set("customer_name", customer_name)
            .set("customer_phone", customer_phone)
            .set("service_details", service_details)
            .apply(params);
        self.client
            .post(&format!("/dispute/{}/evidence", segment(id)), &payload)
            .await
    }

    /// `GET /dispute/{id}/upload_url` – signed URL for uploading evidence.
    pub async fn upload_url(
        &self,
        id: impl Display,
        upload_filename: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get_with_query(
                &format!("/dispute/{}/upload_url", segment(id)),
                &[QueryParam::new("upload_filename", upload_filename)],
            )
            .await
    }

    /// `PUT /dispute/{id}/resolve`.
    ///
    /// `resolution` is `merchant-accepted` or `declined`.
    pub async fn resolve(
        &self,
        id: impl Display,
        resolution: &str,
        message: &str,
        refund_amount: i64,
        uploaded_filename: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("resolution", resolution)
            .set("message", message)
            .set("refund_amount", refund_amount)
            .set("uploaded_filename", uploaded_filename)
            .apply(params);
        self.client
            .put(&format!("/dispute/{}/resolve", segment(id)), &payload)
            .await
    }

    /// `GET /dispute/export`.
    pub async fn export(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/dispute/export", query).await
    }
}

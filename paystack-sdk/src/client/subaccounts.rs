//! Subaccounts API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/subaccount`.
#[derive(Debug, Clone)]
pub struct Subaccounts {
    client: Client,
}

impl Subaccounts {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /subaccount`.
    pub async fn create(
        &self,
        business_name: &str,
        settlement_bank: &str,
        account_number: &str,
        percentage_charge: f64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("business_name", business_name)
            .set("settlement_bank", settlement_bank)
            .set("account_number", account_number)
            .set("percentage_charge", percentage_charge)
            .apply(params);
        self.client.post("/subaccount", &payload).await
    }

    /// `GET /subaccount`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/subaccount", query).await
    }

    /// `GET /subaccount/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/subaccount/{}", segment(id_or_code)))
            .await
    }

    /// `PUT /subaccount/{id_or_code}`.
    pub async fn update(
        &self,
        id_or_code: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/subaccount/{}", segment(id_or_code)), &payload)
            .await
    }
}

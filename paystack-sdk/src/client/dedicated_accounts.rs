//! Dedicated Virtual Accounts API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::objects::customer::DedicatedAccountAssignment;
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/dedicated_account`.
#[derive(Debug, Clone)]
pub struct DedicatedAccounts {
    client: Client,
}

impl DedicatedAccounts {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /dedicated_account` – create an account for an existing
    /// customer.
    pub async fn create(
        &self,
        customer: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("customer", customer).apply(params);
        self.client.post("/dedicated_account", &payload).await
    }

    /// `POST /dedicated_account/assign` – create the customer, validate and
    /// assign an account in one call.
    pub async fn assign(
        &self,
        assignment: &DedicatedAccountAssignment,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::from_serialize(assignment)
            .map_err(ClientError::Serialize)?
            .apply(params);
        self.client
            .post("/dedicated_account/assign", &payload)
            .await
    }

    /// `GET /dedicated_account`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/dedicated_account", query).await
    }

    /// `GET /dedicated_account/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/dedicated_account/{}", segment(id)))
            .await
    }

    /// `GET /dedicated_account/requery` – ask the provider for transfers
    /// made to an account. `date` is `YYYY-MM-DD`.
    pub async fn requery(
        &self,
        account_number: &str,
        provider_slug: &str,
        date: Option<&str>,
    ) -> Result<Response, ClientError> {
        let mut query = vec![
            QueryParam::new("account_number", account_number),
            QueryParam::new("provider_slug", provider_slug),
        ];
        if let Some(date) = date {
            query.push(QueryParam::new("date", date));
        }
        self.client
            .get_with_query("/dedicated_account/requery", &query)
            .await
    }

    /// `DELETE /dedicated_account/{id}`.
    pub async fn deactivate(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client
            .delete(&format!("/dedicated_account/{}", segment(id)))
            .await
    }

    /// `POST /dedicated_account/split` – attach a split or subaccount to a
    /// customer's account.
    pub async fn split(
        &self,
        customer: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("customer", customer).apply(params);
        self.client
            .post("/dedicated_account/split", &payload)
            .await
    }

    /// `DELETE /dedicated_account/split`.
    pub async fn remove_split(&self, account_number: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("account_number", account_number);
        self.client
            .delete_with_body("/dedicated_account/split", &payload)
            .await
    }

    /// `GET /dedicated_account/available_providers`.
    pub async fn bank_providers(&self) -> Result<Response, ClientError> {
        self.client
            .get("/dedicated_account/available_providers")
            .await
    }
}

//! Transaction Splits API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment, to_json};
use crate::objects::split::SubaccountShare;
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/split`.
#[derive(Debug, Clone)]
pub struct TransactionSplits {
    client: Client,
}

impl TransactionSplits {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /split` – create a split.
    ///
    /// * `split_type` – `percentage` or `flat`.
    /// * `bearer_type` – see [`Bearer`](crate::objects::Bearer).
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: &str,
        split_type: &str,
        currency: impl Into<String>,
        subaccounts: &[SubaccountShare],
        bearer_type: impl Into<String>,
        bearer_subaccount: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("name", name)
            .set("type", split_type)
            .set("currency", currency.into())
            .set("subaccounts", to_json(subaccounts)?)
            .set("bearer_type", bearer_type.into())
            .set("bearer_subaccount", bearer_subaccount)
            .apply(params);
        self.client.post("/split", &payload).await
    }

    /// `GET /split`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/split", query).await
    }

    /// `GET /split/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client.get(&format!("/split/{}", segment(id))).await
    }

    /// `PUT /split/{id}` – rename, (de)activate or change the bearer.
    pub async fn update(
        &self,
        id: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/split/{}", segment(id)), &payload)
            .await
    }

    /// `POST /split/{id}/subaccount/add` – add a subaccount, or update its
    /// share if already present.
    pub async fn add_subaccount(
        &self,
        id: impl Display,
        subaccount: &str,
        share: u64,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("subaccount", subaccount)
            .set("share", share);
        self.client
            .post(&format!("/split/{}/subaccount/add", segment(id)), &payload)
            .await
    }

    /// `POST /split/{id}/subaccount/remove`.
    pub async fn remove_subaccount(
        &self,
        id: impl Display,
        subaccount: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("subaccount", subaccount);
        self.client
            .post(&format!("/split/{}/subaccount/remove", segment(id)), &payload)
            .await
    }
}

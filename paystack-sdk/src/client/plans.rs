//! Plans API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/plan`.
#[derive(Debug, Clone)]
pub struct Plans {
    client: Client,
}

impl Plans {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /plan` – create a recurring billing plan.
    ///
    /// `interval` is one of the [`Interval`](crate::objects::Interval)
    /// values.
    pub async fn create(
        &self,
        name: &str,
        amount: i64,
        interval: impl Into<String>,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("name", name)
            .set("amount", amount)
            .set("interval", interval.into())
            .apply(params);
        self.client.post("/plan", &payload).await
    }

    /// `GET /plan`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/plan", query).await
    }

    /// `GET /plan/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/plan/{}", segment(id_or_code)))
            .await
    }

    /// `PUT /plan/{id_or_code}`.
    pub async fn update(
        &self,
        id_or_code: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/plan/{}", segment(id_or_code)), &payload)
            .await
    }
}

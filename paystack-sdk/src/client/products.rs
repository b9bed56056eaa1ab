//! Products API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/product`.
#[derive(Debug, Clone)]
pub struct Products {
    client: Client,
}

impl Products {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /product`.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: i64,
        currency: impl Into<String>,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("name", name)
            .set("description", description)
            .set("price", price)
            .set("currency", currency.into())
            .apply(params);
        self.client.post("/product", &payload).await
    }

    /// `GET /product`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/product", query).await
    }

    /// `GET /product/{id}`.
    pub async fn fetch(&self, id: impl Display) -> Result<Response, ClientError> {
        self.client.get(&format!("/product/{}", segment(id))).await
    }

    /// `PUT /product/{id}`.
    pub async fn update(
        &self,
        id: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/product/{}", segment(id)), &payload)
            .await
    }
}

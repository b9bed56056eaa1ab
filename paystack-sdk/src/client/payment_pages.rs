//! Payment Pages API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment, to_json};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/page`.
#[derive(Debug, Clone)]
pub struct PaymentPages {
    client: Client,
}

impl PaymentPages {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /page`.
    pub async fn create(
        &self,
        name: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("name", name).apply(params);
        self.client.post("/page", &payload).await
    }

    /// `GET /page`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/page", query).await
    }

    /// `GET /page/{id_or_slug}`.
    pub async fn fetch(&self, id_or_slug: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/page/{}", segment(id_or_slug)))
            .await
    }

    /// `PUT /page/{id_or_slug}`.
    pub async fn update(
        &self,
        id_or_slug: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/page/{}", segment(id_or_slug)), &payload)
            .await
    }

    /// `GET /page/check_slug_availability/{slug}`.
    pub async fn check_slug_availability(&self, slug: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/page/check_slug_availability/{}", segment(slug)))
            .await
    }

    /// `POST /page/{id}/product` – attach products to a product page.
    pub async fn add_products(
        &self,
        id: impl Display,
        product_ids: &[u64],
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("product", to_json(product_ids)?);
        self.client
            .post(&format!("/page/{}/product", segment(id)), &payload)
            .await
    }
}

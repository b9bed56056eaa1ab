//! Bulk Charges API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::{Payload, QueryParam};

/// Typed HTTP client for `/bulkcharge`.
#[derive(Debug, Clone)]
pub struct BulkCharges {
    client: Client,
}

impl BulkCharges {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /bulkcharge` – the body is a JSON array, one object per charge
    /// with `authorization`, `amount` and `reference`.
    pub async fn initiate(
        &self,
        charges: impl IntoIterator<Item = Payload>,
    ) -> Result<Response, ClientError> {
        let charges: Vec<Payload> = charges.into_iter().collect();
        self.client.post("/bulkcharge", &charges).await
    }

    /// `GET /bulkcharge`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/bulkcharge", query).await
    }

    /// `GET /bulkcharge/{id_or_code}`.
    pub async fn fetch(&self, id_or_code: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/bulkcharge/{}", segment(id_or_code)))
            .await
    }

    /// `GET /bulkcharge/{id_or_code}/charges`.
    pub async fn fetch_charges(
        &self,
        id_or_code: impl Display,
        query: &[QueryParam],
    ) -> Result<Response, ClientError> {
        self.client
            .get_with_query(
                &format!("/bulkcharge/{}/charges", segment(id_or_code)),
                query,
            )
            .await
    }

    /// `GET /bulkcharge/pause/{code}`.
    pub async fn pause(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/bulkcharge/pause/{}", segment(code)))
            .await
    }

    /// `GET /bulkcharge/resume/{code}`.
    pub async fn resume(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/bulkcharge/resume/{}", segment(code)))
            .await
    }
}

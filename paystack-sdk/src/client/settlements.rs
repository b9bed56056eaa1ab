//! Settlements API.

use std::fmt::Display;

use super::{Client, ClientError, Response, segment};
use crate::params::QueryParam;

/// Typed HTTP client for `/settlement`.
#[derive(Debug, Clone)]
pub struct Settlements {
    client: Client,
}

impl Settlements {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /settlement`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/settlement", query).await
    }

    /// `GET /settlement/{id}/transactions`.
    pub async fn list_transactions(
        &self,
        id: impl Display,
        query: &[QueryParam],
    ) -> Result<Response, ClientError> {
        self.client
            .get_with_query(&format!("/settlement/{}/transactions", segment(id)), query)
            .await
    }
}

//! Miscellaneous lookup endpoints.

use super::{Client, ClientError, Response};
use crate::params::QueryParam;

/// Typed HTTP client for `/bank`, `/country` and
/// `/address_verification/states`.
#[derive(Debug, Clone)]
pub struct Miscellaneous {
    client: Client,
}

impl Miscellaneous {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /bank` – filter with `country`, `currency`, `type`, ….
    pub async fn list_banks(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/bank", query).await
    }

    /// `GET /country`.
    pub async fn list_countries(&self) -> Result<Response, ClientError> {
        self.client.get("/country").await
    }

    /// `GET /address_verification/states` – states for address
    /// verification in `country` (ISO code).
    pub async fn list_states(&self, country: &str) -> Result<Response, ClientError> {
        self.client
            .get_with_query(
                "/address_verification/states",
                &[QueryParam::new("country", country)],
            )
            .await
    }
}

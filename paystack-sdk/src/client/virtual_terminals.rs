//! Virtual Terminal API.

use super::{Client, ClientError, Method, Response, segment, to_json};
use crate::objects::split::Destination;
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/virtual_terminal`.
#[derive(Debug, Clone)]
pub struct VirtualTerminals {
    client: Client,
}

impl VirtualTerminals {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /virtual_terminal`.
    pub async fn create(
        &self,
        name: &str,
        destinations: &[Destination],
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("name", name)
            .set("destinations", to_json(destinations)?)
            .apply(params);
        self.client.post("/virtual_terminal", &payload).await
    }

    /// `GET /virtual_terminal`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/virtual_terminal", query).await
    }

    /// `GET /virtual_terminal/{code}`.
    pub async fn fetch(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/virtual_terminal/{}", segment(code)))
            .await
    }

    /// `PUT /virtual_terminal/{code}` – rename.
    pub async fn update(&self, code: &str, name: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("name", name);
        self.client
            .put(&format!("/virtual_terminal/{}", segment(code)), &payload)
            .await
    }

    /// `PUT /virtual_terminal/{code}/deactivate`.
    pub async fn deactivate(&self, code: &str) -> Result<Response, ClientError> {
        self.client
            .request::<()>(
                Method::PUT,
                &format!("/virtual_terminal/{}/deactivate", segment(code)),
                None,
            )
            .await
    }

    /// `POST /virtual_terminal/{code}/destination/assign`.
    pub async fn assign_destination(
        &self,
        code: &str,
        destinations: &[Destination],
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("destinations", to_json(destinations)?);
        self.client
            .post(
                &format!("/virtual_terminal/{}/destination/assign", segment(code)),
                &payload,
            )
            .await
    }

    /// `POST /virtual_terminal/{code}/destination/unassign` – `targets` are
    /// the destination phone numbers.
    pub async fn unassign_destination(
        &self,
        code: &str,
        targets: &[&str],
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("targets", to_json(targets)?);
        self.client
            .post(
                &format!("/virtual_terminal/{}/destination/unassign", segment(code)),
                &payload,
            )
            .await
    }

    /// `PUT /virtual_terminal/{code}/split_code`.
    pub async fn add_split_code(
        &self,
        code: &str,
        split_code: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("split_code", split_code);
        self.client
            .put(
                &format!("/virtual_terminal/{}/split_code", segment(code)),
                &payload,
            )
            .await
    }

    /// `DELETE /virtual_terminal/{code}/split_code`.
    pub async fn remove_split_code(
        &self,
        code: &str,
        split_code: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("split_code", split_code);
        self.client
            .delete_with_body(
                &format!("/virtual_terminal/{}/split_code", segment(code)),
                &payload,
            )
            .await
    }
}

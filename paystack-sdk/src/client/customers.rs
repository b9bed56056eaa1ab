//! Customers API.

use super::{Client, ClientError, Response, segment};
use crate::objects::customer::Identification;
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/customer`.
#[derive(Debug, Clone)]
pub struct Customers {
    client: Client,
}

impl Customers {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /customer`.
    pub async fn create(
        &self,
        email: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("email", email).apply(params);
        self.client.post("/customer", &payload).await
    }

    /// `GET /customer`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/customer", query).await
    }

    /// `GET /customer/{email_or_code}`.
    pub async fn fetch(&self, email_or_code: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/customer/{}", segment(email_or_code)))
            .await
    }

    /// `PUT /customer/{code}`.
    pub async fn update(
        &self,
        code: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/customer/{}", segment(code)), &payload)
            .await
    }

    /// `POST /customer/{code}/identification` – validate a customer's
    /// identity. The result arrives by webhook.
    pub async fn validate(
        &self,
        code: &str,
        identification: &Identification,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::from_serialize(identification)
            .map_err(ClientError::Serialize)?
            .apply(params);
        self.client
            .post(&format!("/customer/{}/identification", segment(code)), &payload)
            .await
    }

    /// `POST /customer/set_risk_action` – whitelist or blacklist a customer.
    /// Pass `risk_action` as an optional parameter.
    pub async fn set_risk_action(
        &self,
        customer: &str,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("customer", customer).apply(params);
        self.client
            .post("/customer/set_risk_action", &payload)
            .await
    }

    /// `POST /customer/deactivate_authorization` – stop an authorization
    /// from being reused.
    pub async fn deactivate_authorization(
        &self,
        authorization_code: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().set("authorization_code", authorization_code);
        self.client
            .post("/customer/deactivate_authorization", &payload)
            .await
    }
}

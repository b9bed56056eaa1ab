//! Terminal API (physical POS devices).

use std::fmt::Display;

use serde_json::Value;

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/terminal`.
#[derive(Debug, Clone)]
pub struct Terminals {
    client: Client,
}

impl Terminals {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /terminal/{terminal_id}/event` – push an invoice or
    /// transaction event to a device.
    ///
    /// * `event_type` – `invoice` or `transaction`.
    /// * `action` – `process`, `view` or `print`.
    pub async fn send_event(
        &self,
        terminal_id: impl Display,
        event_type: &str,
        action: &str,
        data: Value,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("type", event_type)
            .set("action", action)
            .set("data", data);
        self.client
            .post(&format!("/terminal/{}/event", segment(terminal_id)), &payload)
            .await
    }

    /// `GET /terminal/{terminal_id}/event/{event_id}` – whether the device
    /// received the event.
    pub async fn fetch_event_status(
        &self,
        terminal_id: impl Display,
        event_id: impl Display,
    ) -> Result<Response, ClientError> {
        self.client
            .get(&format!(
                "/terminal/{}/event/{}",
                segment(terminal_id),
                segment(event_id)
            ))
            .await
    }

    /// `GET /terminal/{terminal_id}/presence` – whether the device is online.
    pub async fn fetch_presence(&self, terminal_id: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/terminal/{}/presence", segment(terminal_id)))
            .await
    }

    /// `GET /terminal`.
    pub async fn list(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/terminal", query).await
    }

    /// `GET /terminal/{terminal_id}`.
    pub async fn fetch(&self, terminal_id: impl Display) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/terminal/{}", segment(terminal_id)))
            .await
    }

    /// `PUT /terminal/{terminal_id}` – change name or address.
    pub async fn update(
        &self,
        terminal_id: impl Display,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new().apply(params);
        self.client
            .put(&format!("/terminal/{}", segment(terminal_id)), &payload)
            .await
    }

    /// `POST /terminal/commission_device` – activate a device.
    pub async fn commission(&self, serial_number: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("serial_number", serial_number);
        self.client
            .post("/terminal/commission_device", &payload)
            .await
    }

    /// `POST /terminal/decommission_device` – unlink a device.
    pub async fn decommission(&self, serial_number: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("serial_number", serial_number);
        self.client
            .post("/terminal/decommission_device", &payload)
            .await
    }
}

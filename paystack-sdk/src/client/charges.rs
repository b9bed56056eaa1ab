//! Charge API.
//!
//! A charge may pause and ask for more input (`send_pin`, `send_otp`,
//! `send_phone`, `send_birthday`, `send_address`); answer with the matching
//! `submit_*` call using the charge reference.

use super::{Client, ClientError, Response, segment};
use crate::params::{OptionalParam, Payload};

/// Typed HTTP client for `/charge`.
#[derive(Debug, Clone)]
pub struct Charges {
    client: Client,
}

impl Charges {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `POST /charge` – pass the payment instrument (`bank`,
    /// `authorization_code`, `mobile_money`, …) as optional parameters.
    pub async fn create(
        &self,
        email: &str,
        amount: i64,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("email", email)
            .set("amount", amount)
            .apply(params);
        self.client.post("/charge", &payload).await
    }

    /// `POST /charge/submit_pin`.
    pub async fn submit_pin(&self, pin: &str, reference: &str) -> Result<Response, ClientError> {
        self.submit("/charge/submit_pin", "pin", pin, reference).await
    }

    /// `POST /charge/submit_otp`.
    pub async fn submit_otp(&self, otp: &str, reference: &str) -> Result<Response, ClientError> {
        self.submit("/charge/submit_otp", "otp", otp, reference).await
    }

    /// `POST /charge/submit_phone`.
    pub async fn submit_phone(
        &self,
        phone: &str,
        reference: &str,
    ) -> Result<Response, ClientError> {
        self.submit("/charge/submit_phone", "phone", phone, reference)
            .await
    }

    /// `POST /charge/submit_birthday` – `birthday` is `YYYY-MM-DD`.
    pub async fn submit_birthday(
        &self,
        birthday: &str,
        reference: &str,
    ) -> Result<Response, ClientError> {
        self.submit("/charge/submit_birthday", "birthday", birthday, reference)
            .await
    }

    /// `POST /charge/submit_address`.
    pub async fn submit_address(
        &self,
        address: &str,
        reference: &str,
        city: &str,
        state: &str,
        zip_code: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("address", address)
            .set("reference", reference)
            .set("city", city)
            .set("state", state)
            .set("zip_code", zip_code);
        self.client.post("/charge/submit_address", &payload).await
    }

    /// `GET /charge/{reference}` – poll a charge left in `pending`.
    pub async fn check_pending(&self, reference: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/charge/{}", segment(reference)))
            .await
    }

    async fn submit(
        &self,
        path: &str,
        field: &str,
        value: &str,
        reference: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set(field, value)
            .set("reference", reference);
        self.client.post(path, &payload).await
    }
}

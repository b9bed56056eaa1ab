//! Transfers Control API: balance and OTP settings.

use super::{Client, ClientError, Response};
use crate::params::{Payload, QueryParam};

/// Typed HTTP client for `/balance` and the `/transfer` OTP endpoints.
#[derive(Debug, Clone)]
pub struct TransferControl {
    client: Client,
}

impl TransferControl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /balance`.
    pub async fn balance(&self) -> Result<Response, ClientError> {
        self.client.get("/balance").await
    }

    /// `GET /balance/ledger`.
    pub async fn balance_ledger(&self, query: &[QueryParam]) -> Result<Response, ClientError> {
        self.client.get_with_query("/balance/ledger", query).await
    }

    /// `POST /transfer/resend_otp`.
    ///
    /// `reason` is `resend_otp` or `transfer`.
    pub async fn resend_otp(
        &self,
        transfer_code: &str,
        reason: &str,
    ) -> Result<Response, ClientError> {
        let payload = Payload::new()
            .set("transfer_code", transfer_code)
            .set("reason", reason);
        self.client.post("/transfer/resend_otp", &payload).await
    }

    /// `POST /transfer/disable_otp` – request an OTP to turn OTP off.
    pub async fn disable_otp(&self) -> Result<Response, ClientError> {
        self.client.post_empty("/transfer/disable_otp").await
    }

    /// `POST /transfer/disable_otp_finalize`.
    pub async fn finalize_disable_otp(&self, otp: &str) -> Result<Response, ClientError> {
        let payload = Payload::new().set("otp", otp);
        self.client
            .post("/transfer/disable_otp_finalize", &payload)
            .await
    }

    /// `POST /transfer/enable_otp`.
    pub async fn enable_otp(&self) -> Result<Response, ClientError> {
        self.client.post_empty("/transfer/enable_otp").await
    }
}

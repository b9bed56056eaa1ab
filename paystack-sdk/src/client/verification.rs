//! Verification API: account numbers and card BINs.

use super::{Client, ClientError, Response, segment};
use crate::objects::bank::AccountValidation;
use crate::params::{OptionalParam, Payload, QueryParam};

/// Typed HTTP client for `/bank/resolve`, `/bank/validate` and
/// `/decision/bin`.
#[derive(Debug, Clone)]
pub struct Verification {
    client: Client,
}

impl Verification {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /bank/resolve` – look up the account name behind an account
    /// number.
    pub async fn resolve_account(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get_with_query(
                "/bank/resolve",
                &[
                    QueryParam::new("account_number", account_number),
                    QueryParam::new("bank_code", bank_code),
                ],
            )
            .await
    }

    /// `POST /bank/validate`.
    pub async fn validate_account(
        &self,
        validation: &AccountValidation,
        params: impl IntoIterator<Item = OptionalParam>,
    ) -> Result<Response, ClientError> {
        let payload = Payload::from_serialize(validation)
            .map_err(ClientError::Serialize)?
            .apply(params);
        self.client.post("/bank/validate", &payload).await
    }

    /// `GET /decision/bin/{bin}` – the first six digits of a card.
    pub async fn resolve_card_bin(&self, bin: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("/decision/bin/{}", segment(bin)))
            .await
    }
}

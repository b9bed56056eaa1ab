//! Customer request types.

use serde::{Deserialize, Serialize};

/// Request body of `POST /customer/{code}/identification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    pub country: String,
    /// Only `bank_account` is supported by the API today.
    #[serde(rename = "type")]
    pub kind: String,
    pub account_number: String,
    pub bvn: String,
    pub bank_code: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
}

/// Request body of `POST /dedicated_account/assign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedicatedAccountAssignment {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Provider slug, e.g. `wema-bank` or `titan-paystack`.
    pub preferred_bank: String,
    pub country: String,
}

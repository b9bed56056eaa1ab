//! Bank and account-resolution types.

use serde::{Deserialize, Serialize};

/// One entry of `GET /bank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub code: String,
    #[serde(default)]
    pub longcode: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub pay_with_bank: bool,
    #[serde(default)]
    pub active: bool,
    pub country: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `data` of `GET /bank/resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAccount {
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub bank_id: Option<u64>,
}

/// Request body of `POST /bank/validate` (South African account checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValidation {
    pub account_name: String,
    pub account_number: String,
    /// `personal` or `business`.
    pub account_type: String,
    pub bank_code: String,
    pub country_code: String,
    /// `identityNumber`, `passportNumber` or `businessRegistrationNumber`.
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

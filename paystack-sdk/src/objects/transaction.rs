//! Transaction response types.

use serde::{Deserialize, Serialize};

/// `data` of `POST /transaction/initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializedTransaction {
    /// Checkout page the customer should be redirected to.
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// A reusable card or bank authorization returned after a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub authorization_code: String,
    #[serde(default)]
    pub bin: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub exp_month: Option<String>,
    #[serde(default)]
    pub exp_year: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub reusable: bool,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
}

/// `data` of `GET /transaction/verify/{reference}` and
/// `GET /transaction/{id}`.
///
/// Only the commonly used fields are typed; deserialize into
/// `serde_json::Value` for the full object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub status: String,
    pub reference: String,
    /// Amount in the currency's subunit (kobo, pesewas, cents).
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub gateway_response: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub fees: Option<i64>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub authorization: Option<Authorization>,
}

//! HTTP clients for the Paystack API.
//!
//! [`Client`] is the dispatch core shared by every resource facade. The
//! facades are thin: each method builds a [`Payload`](crate::params::Payload)
//! and a path, calls the core, and hands the [`Response`] back untouched.

mod apple_pay;
mod bulk_charges;
mod charges;
mod customers;
mod dedicated_accounts;
mod dispatch;
mod disputes;
mod integration;
mod miscellaneous;
mod payment_pages;
mod payment_requests;
mod plans;
mod products;
mod refunds;
mod settlements;
mod subaccounts;
mod subscriptions;
mod terminals;
mod transaction_splits;
mod transactions;
mod transfer_control;
mod transfer_recipients;
mod transfers;
mod transport;
mod verification;
mod virtual_terminals;
mod webhook;

pub use apple_pay::ApplePay;
pub use bulk_charges::BulkCharges;
pub use charges::Charges;
pub use customers::Customers;
pub use dedicated_accounts::DedicatedAccounts;
pub use dispatch::{
    BASE_URL_ENV, Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, Response,
    SECRET_KEY_ENV,
};
pub use disputes::Disputes;
pub use integration::Integration;
pub use miscellaneous::Miscellaneous;
pub use payment_pages::PaymentPages;
pub use payment_requests::PaymentRequests;
pub use plans::Plans;
pub use products::Products;
pub use refunds::Refunds;
pub use settlements::Settlements;
pub use subaccounts::Subaccounts;
pub use subscriptions::Subscriptions;
pub use terminals::Terminals;
pub use transaction_splits::TransactionSplits;
pub use transactions::Transactions;
pub use transfer_control::TransferControl;
pub use transfer_recipients::TransferRecipients;
pub use transfers::Transfers;
pub use transport::{HttpRequest, Transport, TransportError};
pub use verification::Verification;
pub use virtual_terminals::VirtualTerminals;
pub use webhook::verify_webhook;

pub use reqwest::{Method, StatusCode};

use reqwest::header::InvalidHeaderValue;

/// Errors produced by the SDK HTTP clients.
///
/// Only failures to complete a round trip are errors. A response with a
/// `4xx`/`5xx` status is returned as an ordinary [`Response`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No secret key was configured. Detected on the first call, not at
    /// construction.
    #[error("missing secret key: set one on the client builder or via PAYSTACK_SECRET_KEY")]
    MissingSecretKey,

    /// The secret key contains bytes that cannot go into an HTTP header.
    #[error("secret key is not a valid header value")]
    InvalidSecretKey(#[source] InvalidHeaderValue),

    /// The configured user agent cannot go into an HTTP header.
    #[error("user agent is not a valid header value")]
    InvalidUserAgent(#[source] InvalidHeaderValue),

    /// The base URL override could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL override is not `http` or `https`.
    #[error("unsupported base url scheme: {0}")]
    UnsupportedScheme(String),

    /// The base URL override carries a query string or fragment, which
    /// request paths cannot be appended to.
    #[error("base url must not have a query or fragment: {0}")]
    BaseUrlQuery(String),

    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body did not match the requested type.
    #[error("failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Percent-encode one path segment. Alphanumeric identifiers pass through
/// unchanged.
pub(crate) fn segment(value: impl std::fmt::Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// Serialize a nested payload value.
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(
    value: &T,
) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(value).map_err(ClientError::Serialize)
}

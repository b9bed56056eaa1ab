//! Typed shapes for Paystack responses.
//!
//! Facades return raw [`Response`](crate::client::Response)s; these types
//! are for callers that want to deserialize them via
//! [`Response::envelope`](crate::client::Response::envelope) or
//! [`Response::json`](crate::client::Response::json).

pub mod bank;
pub mod customer;
pub mod enums;
pub mod split;
pub mod transaction;
pub mod webhook;

pub use enums::{Bearer, Channel, Currency, Interval, RiskAction};

use serde::{Deserialize, Serialize};

/// The wrapper every Paystack endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `true` when the API considers the call successful.
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Pagination metadata attached to list responses.
///
/// Offset-paginated endpoints fill `total`/`page`/`page_count`, cursor
/// endpoints fill `next`/`previous`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skipped: Option<u64>,
    #[serde(default)]
    pub per_page: Option<PerPage>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// Paystack reports `perPage` as a number on some endpoints and a string on
/// others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerPage {
    Number(u64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn envelope_with_offset_meta() {
        let raw = json!({
            "status": true,
            "message": "Plans retrieved",
            "data": [{"id": 1}],
            "meta": {"total": 1, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 1}
        });
        let envelope: Envelope<Vec<Value>> = serde_json::from_value(raw).unwrap();
        assert!(envelope.status);
        assert_eq!(envelope.data.unwrap().len(), 1);
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.per_page, Some(PerPage::Number(50)));
        assert_eq!(meta.page_count, Some(1));
    }

    #[test]
    fn envelope_with_cursor_meta_and_string_per_page() {
        let raw = json!({
            "status": true,
            "message": "ok",
            "data": [],
            "meta": {"next": "Mjk=", "previous": null, "perPage": "50"}
        });
        let envelope: Envelope<Vec<Value>> = serde_json::from_value(raw).unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.next.as_deref(), Some("Mjk="));
        assert_eq!(meta.per_page, Some(PerPage::Text("50".into())));
    }

    #[test]
    fn error_envelope_has_no_data() {
        let raw = json!({"status": false, "message": "Invalid key"});
        let envelope: Envelope<Value> = serde_json::from_value(raw).unwrap();
        assert!(!envelope.status);
        assert_eq!(envelope.message, "Invalid key");
        assert!(envelope.data.is_none());
        assert!(envelope.meta.is_none());
    }

    #[derive(Debug, Deserialize)]
    struct Domain {
        name: String,
    }

    #[test]
    fn envelope_data_need_not_be_default() {
        let raw = json!({"status": true, "message": "ok", "data": {"name": "example.com"}});
        let envelope: Envelope<Domain> = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.data.unwrap().name, "example.com");

        let raw = json!({"status": false, "message": "Domain not found"});
        let envelope: Envelope<Domain> = serde_json::from_value(raw).unwrap();
        assert!(envelope.data.is_none());
    }
}

//! Request payload and query string composition.
//!
//! Write endpoints take their required fields as typed arguments and
//! everything else as a list of [`OptionalParam`]s. Each optional parameter
//! is a pure `Payload -> Payload` transformation; they are applied strictly
//! left to right after the required fields, so the last one touching a key
//! wins.
//!
//! Read endpoints take an ordered list of [`QueryParam`]s which
//! [`append_query`] turns into a query string.

use serde::Serialize;
use serde_json::{Map, Value};
use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON object body sent with write operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, overwriting any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set `key` only when `value` is `Some`.
    pub fn set_opt(self, key: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Start from the fields of a serializable struct.
    ///
    /// Fails if `value` does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(serde::ser::Error::custom(
                "payload must serialize to a JSON object",
            )),
        }
    }

    /// Fold `params` over the payload, left to right.
    pub fn apply(self, params: impl IntoIterator<Item = OptionalParam>) -> Self {
        params.into_iter().fold(self, |payload, param| param.apply(payload))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ---------------------------------------------------------------------------
// OptionalParam
// ---------------------------------------------------------------------------

type Transform = Box<dyn FnOnce(Payload) -> Payload + Send + Sync>;

/// One optional field (or any other adjustment) applied to a [`Payload`].
pub struct OptionalParam {
    transform: Transform,
}

impl std::fmt::Debug for OptionalParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionalParam").finish_non_exhaustive()
    }
}

impl OptionalParam {
    /// Wrap an arbitrary payload transformation.
    pub fn new(transform: impl FnOnce(Payload) -> Payload + Send + Sync + 'static) -> Self {
        Self {
            transform: Box::new(transform),
        }
    }

    /// Set `key` to `value`.
    pub fn with(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        Self::new(move |payload| payload.set(key, value))
    }

    /// Set `key` to the JSON form of `value`.
    pub fn with_serialized<T: Serialize>(
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::with(key, serde_json::to_value(value)?))
    }

    pub fn apply(self, payload: Payload) -> Payload {
        (self.transform)(payload)
    }

    pub fn amount(amount: i64) -> Self {
        Self::with("amount", amount)
    }

    pub fn bearer(bearer: impl Into<String>) -> Self {
        Self::with("bearer", bearer.into())
    }

    pub fn callback_url(url: impl Into<String>) -> Self {
        Self::with("callback_url", url.into())
    }

    /// Restrict the payment channels offered, e.g. `["card", "bank"]`.
    pub fn channels<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let channels: Vec<Value> = channels
            .into_iter()
            .map(|c| Value::String(c.into()))
            .collect();
        Self::with("channels", channels)
    }

    pub fn currency(currency: impl Into<String>) -> Self {
        Self::with("currency", currency.into())
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self::with("description", description.into())
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self::with("email", email.into())
    }

    pub fn first_name(name: impl Into<String>) -> Self {
        Self::with("first_name", name.into())
    }

    pub fn interval(interval: impl Into<String>) -> Self {
        Self::with("interval", interval.into())
    }

    pub fn invoice_limit(limit: u32) -> Self {
        Self::with("invoice_limit", limit)
    }

    pub fn last_name(name: impl Into<String>) -> Self {
        Self::with("last_name", name.into())
    }

    /// Attach free-form metadata. Paystack stores it verbatim.
    pub fn metadata(metadata: Value) -> Self {
        Self::with("metadata", metadata)
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::with("name", name.into())
    }

    pub fn phone(phone: impl Into<String>) -> Self {
        Self::with("phone", phone.into())
    }

    pub fn plan(plan: impl Into<String>) -> Self {
        Self::with("plan", plan.into())
    }

    pub fn reference(reference: impl Into<String>) -> Self {
        Self::with("reference", reference.into())
    }

    pub fn split_code(code: impl Into<String>) -> Self {
        Self::with("split_code", code.into())
    }

    /// Start date, see [`format_date`] for the wire format.
    pub fn start_date(date: OffsetDateTime) -> Self {
        Self::with("start_date", format_date(date))
    }

    pub fn subaccount(code: impl Into<String>) -> Self {
        Self::with("subaccount", code.into())
    }

    pub fn transaction_charge(charge: i64) -> Self {
        Self::with("transaction_charge", charge)
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// One `key=value` pair of a query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    pub fn page(page: u32) -> Self {
        Self::new("page", page)
    }

    pub fn per_page(per_page: u32) -> Self {
        Self::new("perPage", per_page)
    }

    /// `from` bound, see [`format_date`] for the wire format.
    pub fn from_date(date: OffsetDateTime) -> Self {
        Self::new("from", format_date(date))
    }

    /// `to` bound, see [`format_date`] for the wire format.
    pub fn to_date(date: OffsetDateTime) -> Self {
        Self::new("to", format_date(date))
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self::new("status", status.into())
    }

    pub fn customer(customer: impl ToString) -> Self {
        Self::new("customer", customer)
    }

    pub fn currency(currency: impl Into<String>) -> Self {
        Self::new("currency", currency.into())
    }
}

/// Append `params` to `path` in order.
///
/// The first pair is joined with `?` unless `path` already carries a query
/// string, in which case every pair is joined with `&`. Keys and values are
/// percent-encoded; duplicates are kept.
pub fn append_query(path: &str, params: &[QueryParam]) -> String {
    let mut out = String::from(path);
    let mut has_query = path.contains('?');
    for param in params {
        out.push(if has_query { '&' } else { '?' });
        has_query = true;
        out.push_str(&urlencoding::encode(&param.key));
        out.push('=');
        out.push_str(&urlencoding::encode(&param.value));
    }
    out
}

/// Dates go out as RFC 3339 in UTC.
///
/// RFC 3339 only covers years 0000 to 9999. Dates outside that range are
/// sent as a unix timestamp instead, which the API also accepts.
pub fn format_date(date: OffsetDateTime) -> String {
    let utc = date.to_offset(UtcOffset::UTC);
    utc.format(&Rfc3339)
        .unwrap_or_else(|_| utc.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;
    use time::{Date, Month};

    #[test]
    fn optional_params_apply_left_to_right() {
        let payload = Payload::new()
            .set("email", "a@example.com")
            .set("amount", 100)
            .apply([
                OptionalParam::currency("NGN"),
                OptionalParam::amount(200),
                OptionalParam::currency("GHS"),
            ]);

        assert_eq!(payload.get("email"), Some(&json!("a@example.com")));
        assert_eq!(payload.get("amount"), Some(&json!(200)));
        assert_eq!(payload.get("currency"), Some(&json!("GHS")));
        assert_eq!(payload.len(), 3);
    }

    #[test]
    fn no_optional_params_leaves_payload_untouched() {
        let base = Payload::new().set("name", "Gold");
        let applied = base.clone().apply(Vec::new());
        assert_eq!(base, applied);
    }

    #[test]
    fn custom_transform_can_remove_keys() {
        let payload = Payload::new().set("a", 1).set("b", 2).apply([OptionalParam::new(
            |p: Payload| {
                let mut map = p.into_inner();
                map.remove("a");
                Payload::from(map)
            },
        )]);
        assert_eq!(payload.get("a"), None);
        assert_eq!(payload.get("b"), Some(&json!(2)));
    }

    #[test]
    fn channels_serialize_as_array() {
        let payload = Payload::new().apply([OptionalParam::channels(["card", "bank"])]);
        assert_eq!(payload.get("channels"), Some(&json!(["card", "bank"])));
    }

    #[test]
    fn with_serialized_uses_json_form() {
        #[derive(Serialize)]
        struct Split {
            subaccount: &'static str,
            share: u32,
        }
        let param = OptionalParam::with_serialized(
            "subaccounts",
            &vec![Split {
                subaccount: "ACCT_1",
                share: 20,
            }],
        )
        .unwrap();
        let payload = Payload::new().apply([param]);
        assert_eq!(
            payload.get("subaccounts"),
            Some(&json!([{"subaccount": "ACCT_1", "share": 20}]))
        );
    }

    #[test]
    fn from_serialize_requires_object() {
        #[derive(Serialize)]
        struct Body {
            email: &'static str,
        }
        let payload = Payload::from_serialize(&Body { email: "a@b.co" })
            .unwrap()
            .apply([OptionalParam::first_name("Ada")]);
        assert_eq!(payload.get("email"), Some(&json!("a@b.co")));
        assert_eq!(payload.get("first_name"), Some(&json!("Ada")));

        assert!(Payload::from_serialize(&vec![1, 2]).is_err());
    }

    #[test]
    fn set_opt_skips_none() {
        let payload = Payload::new()
            .set_opt("a", Some("x"))
            .set_opt("b", None::<String>);
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn payload_serializes_as_plain_object() {
        let payload = Payload::new().set("plan", "PLN_1");
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"plan":"PLN_1"}"#);
    }

    #[test]
    fn query_starts_with_question_mark() {
        let path = append_query(
            "/transaction",
            &[QueryParam::per_page(50), QueryParam::page(2)],
        );
        assert_eq!(path, "/transaction?perPage=50&page=2");
    }

    #[test]
    fn query_on_existing_query_uses_ampersand() {
        let path = append_query("/bank?country=nigeria", &[QueryParam::new("currency", "NGN")]);
        assert_eq!(path, "/bank?country=nigeria&currency=NGN");
    }

    #[test]
    fn query_keeps_duplicates_in_order() {
        let path = append_query(
            "/x",
            &[
                QueryParam::status("a"),
                QueryParam::status("b"),
                QueryParam::status("a"),
            ],
        );
        assert_eq!(path, "/x?status=a&status=b&status=a");
    }

    #[test]
    fn empty_query_leaves_path_alone() {
        assert_eq!(append_query("/plan", &[]), "/plan");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let path = append_query("/customer", &[QueryParam::new("email", "a b&c")]);
        assert_eq!(path, "/customer?email=a%20b%26c");
    }

    #[test]
    fn dates_use_rfc3339() {
        let param = QueryParam::from_date(datetime!(2024-01-02 03:04:05 UTC));
        assert_eq!(param.value, "2024-01-02T03:04:05Z");
        let payload = Payload::new().apply([OptionalParam::start_date(datetime!(
            2024-01-02 03:04:05 UTC
        ))]);
        assert_eq!(payload.get("start_date"), Some(&json!("2024-01-02T03:04:05Z")));
        assert_eq!(
            QueryParam::to_date(datetime!(2024-01-02 04:04:05 +01:00)).value,
            "2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn offset_with_seconds_is_sent_in_utc() {
        let offset = UtcOffset::from_hms(0, 0, 30).unwrap();
        let date = datetime!(2024-01-02 03:04:05 UTC).to_offset(offset);
        assert_eq!(QueryParam::from_date(date).value, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn years_outside_rfc3339_fall_back_to_unix_timestamp() {
        let date = Date::from_calendar_date(-1, Month::January, 1)
            .unwrap()
            .midnight()
            .assume_utc();
        let expected = date.unix_timestamp().to_string();
        assert_eq!(QueryParam::from_date(date).value, expected);
        assert_eq!(QueryParam::to_date(date).value, expected);
        let payload = Payload::new().apply([OptionalParam::start_date(date)]);
        assert_eq!(payload.get("start_date"), Some(&json!(expected)));
    }
}

//! The dispatch core: configuration plus one authenticated round trip.

use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::ClientError;
use super::transport::{HttpRequest, Transport};
use crate::objects::Envelope;
use crate::params::{QueryParam, append_query};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("paystack-sdk/", env!("CARGO_PKG_VERSION"));

/// Environment variable read by [`ClientBuilder::from_env`] for the secret key.
pub const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";

/// Environment variable read by [`ClientBuilder::from_env`] for a base URL
/// override.
pub const BASE_URL_ENV: &str = "PAYSTACK_BASE_URL";

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Status code and raw body of a completed round trip.
///
/// The body is kept verbatim; nothing is inferred from the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(ClientError::Deserialize)
    }

    /// Deserialize the body as the standard Paystack envelope around `T`.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>, ClientError> {
        self.json()
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

struct ClientConfig {
    base_url: String,
    secret_key: Option<String>,
    user_agent: HeaderValue,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Shared, read-only connection configuration and the request dispatcher.
///
/// Cloning only bumps a reference count, so every facade holds its own
/// handle to the same configuration and transport.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
}

impl Client {
    /// Production client authenticated with `secret_key`, using a default
    /// `reqwest::Client`.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            config: Arc::new(ClientConfig {
                base_url: DEFAULT_BASE_URL.to_owned(),
                secret_key: Some(secret_key.into()),
                user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
                transport: Arc::new(reqwest::Client::new()),
            }),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn has_secret_key(&self) -> bool {
        self.config.secret_key.is_some()
    }

    /// Perform one authenticated request.
    ///
    /// `path` is appended verbatim to the base URL. When `body` is present it
    /// is serialized to JSON. Any completed round trip is `Ok`, whatever its
    /// status code.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let headers = self.headers()?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ClientError::Serialize)?
            .map(Bytes::from);

        let request = HttpRequest {
            method: method.clone(),
            url: format!("{}{}", self.config.base_url, path),
            headers,
            body,
        };

        let route = loggable_path(path);
        debug!(%method, route, "sending paystack request");
        match self.config.transport.execute(request).await {
            Ok(resp) => {
                debug!(
                    %method,
                    route,
                    status = %resp.status(),
                    bytes = resp.body().len(),
                    "received paystack response"
                );
                Ok(resp)
            }
            Err(err) => {
                warn!(%method, route, error = %err, "paystack request failed");
                Err(err.into())
            }
        }
    }

    /// Like [`request`](Self::request), but deserializes the body into `T`.
    pub async fn request_into<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, body).await?.json()
    }

    pub async fn get(&self, path: &str) -> Result<Response, ClientError> {
        self.request::<()>(Method::GET, path, None).await
    }

    /// `GET` with `query` appended to `path` in order.
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[QueryParam],
    ) -> Result<Response, ClientError> {
        self.get(&append_query(path, query)).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `POST` without a request body.
    pub async fn post_empty(&self, path: &str) -> Result<Response, ClientError> {
        self.request::<()>(Method::POST, path, None).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        self.request::<()>(Method::DELETE, path, None).await
    }

    pub async fn delete_with_body<B>(&self, path: &str, body: &B) -> Result<Response, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, Some(body)).await
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let secret_key = self
            .config
            .secret_key
            .as_deref()
            .ok_or(ClientError::MissingSecretKey)?;
        let mut authorization = HeaderValue::from_str(&format!("Bearer {secret_key}"))
            .map_err(ClientError::InvalidSecretKey)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, self.config.user_agent.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

// ---------------------------------------------------------------------------
// ClientBuilder
// ---------------------------------------------------------------------------

/// Construction-time configuration for [`Client`].
///
/// Nothing is validated until [`build`](Self::build), and a missing secret
/// key is not an error until the first request.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    secret_key: Option<String>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Point the client at another API root, e.g. a local mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(client)
    }

    /// Send requests through a custom [`Transport`].
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share an existing transport between several clients.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Fill the secret key and base URL from [`SECRET_KEY_ENV`] and
    /// [`BASE_URL_ENV`] when those variables are set and non-empty.
    /// Values already set on the builder win.
    pub fn from_env(self) -> Self {
        self.from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if self.secret_key.is_none() {
            self.secret_key = read(SECRET_KEY_ENV);
        }
        if self.base_url.is_none() {
            self.base_url = read(BASE_URL_ENV);
        }
        self
    }

    pub fn build(self) -> Result<Client, ClientError> {
        let base_url = match self.base_url {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_BASE_URL.to_owned(),
        };
        let user_agent = match self.user_agent {
            Some(agent) => HeaderValue::from_str(&agent).map_err(ClientError::InvalidUserAgent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(reqwest::Client::new()));

        Ok(Client {
            config: Arc::new(ClientConfig {
                base_url,
                secret_key: self.secret_key,
                user_agent,
                transport,
            }),
        })
    }
}

/// Validate `raw` and strip trailing slashes so paths can be concatenated.
fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let parsed = Url::parse(raw)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ClientError::UnsupportedScheme(other.to_owned())),
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ClientError::BaseUrlQuery(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

/// Query strings carry account numbers and emails; keep them out of logs.
fn loggable_path(path: &str) -> &str {
    path.split_once('?').map_or(path, |(route, _)| route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_user_agent_carries_version() {
        assert!(DEFAULT_USER_AGENT.starts_with("paystack-sdk/"));
        assert!(DEFAULT_USER_AGENT.len() > "paystack-sdk/".len());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = Client::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn base_url_with_prefix_is_kept() {
        let client = Client::builder()
            .base_url("http://localhost:8080/paystack")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/paystack");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = Client::builder()
            .base_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn rejects_base_url_with_query_or_fragment() {
        for raw in ["http://h.test/api?x=1", "http://h.test/api#top"] {
            let err = Client::builder().base_url(raw).build().unwrap_err();
            assert!(matches!(err, ClientError::BaseUrlQuery(ref s) if s == raw));
        }
    }

    #[test]
    fn env_lookup_fills_missing_values() {
        let builder = ClientBuilder::default().from_lookup(|name| match name {
            SECRET_KEY_ENV => Some("sk_env".to_owned()),
            BASE_URL_ENV => Some("http://env.test/".to_owned()),
            _ => None,
        });
        assert_eq!(builder.secret_key.as_deref(), Some("sk_env"));
        let client = builder.build().unwrap();
        assert!(client.has_secret_key());
        assert_eq!(client.base_url(), "http://env.test");
    }

    #[test]
    fn env_lookup_ignores_blank_values() {
        let builder = ClientBuilder::default().from_lookup(|_| Some("  ".to_owned()));
        assert!(builder.secret_key.is_none());
        assert!(builder.base_url.is_none());
        let client = builder.build().unwrap();
        assert!(!client.has_secret_key());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_values_win_over_env() {
        let builder = Client::builder()
            .secret_key("sk_explicit")
            .base_url("http://explicit.test")
            .from_lookup(|_| Some("http://env.test".to_owned()));
        assert_eq!(builder.secret_key.as_deref(), Some("sk_explicit"));
        assert_eq!(builder.base_url.as_deref(), Some("http://explicit.test"));
    }

    #[test]
    fn logged_path_drops_query_string() {
        assert_eq!(
            loggable_path("/bank/resolve?account_number=0022728151&bank_code=063"),
            "/bank/resolve"
        );
        assert_eq!(loggable_path("/plan/abc123"), "/plan/abc123");
    }

    #[test]
    fn rejects_bad_user_agent() {
        let err = Client::builder().user_agent("bad\nagent").build().unwrap_err();
        assert!(matches!(err, ClientError::InvalidUserAgent(_)));
    }

    #[test]
    fn builds_without_secret_key() {
        let client = Client::builder().build().unwrap();
        assert!(!client.has_secret_key());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn headers_require_secret_key() {
        let client = Client::builder().build().unwrap();
        assert!(matches!(client.headers(), Err(ClientError::MissingSecretKey)));
    }

    #[test]
    fn headers_reject_unencodable_key() {
        let client = Client::builder().secret_key("sk\r\nx").build().unwrap();
        assert!(matches!(client.headers(), Err(ClientError::InvalidSecretKey(_))));
    }

    #[test]
    fn headers_are_bearer_json_and_user_agent() {
        let client = Client::new("sk_test_123");
        let headers = client.headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sk_test_123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn debug_output_redacts_secret_key() {
        let client = Client::new("sk_live_secret");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("sk_live_secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn response_json_and_envelope() {
        let resp = Response::new(
            StatusCode::OK,
            r#"{"status":true,"message":"ok","data":{"id":7}}"#,
        );
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["data"]["id"], json!(7));

        let envelope = resp.envelope::<serde_json::Value>().unwrap();
        assert!(envelope.status);
        assert_eq!(envelope.data, Some(json!({"id": 7})));
    }

    #[test]
    fn response_json_mismatch_is_deserialize_error() {
        let resp = Response::new(StatusCode::OK, "<html>");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ClientError::Deserialize(_)));
    }

    #[test]
    fn error_status_is_still_a_response() {
        let resp = Response::new(StatusCode::NOT_FOUND, "{}");
        assert!(!resp.is_success());
        assert_eq!(resp.text(), "{}");
    }
}

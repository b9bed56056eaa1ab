//! The HTTP transport seam.
//!
//! [`Client`](super::Client) never talks to `reqwest` directly; it hands a
//! fully-built [`HttpRequest`] to a [`Transport`]. Production code uses the
//! `reqwest::Client` implementation below, tests substitute their own.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;

use super::Response;

/// A request ready to go on the wire: absolute URL, final headers, body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Failure to complete a round trip.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Borrow the underlying `reqwest` error, if that is what failed.
    pub fn as_reqwest(&self) -> Option<&reqwest::Error> {
        self.source.downcast_ref()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must be safe to share between concurrent calls; the
/// client holds a single instance behind an `Arc`.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError> {
        let mut builder = self
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;
        Ok(Response::new(status, body))
    }
}

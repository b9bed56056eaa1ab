#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use paystack_sdk::client::{
    Client, HttpRequest, Response, StatusCode, Transport, TransportError,
};
use serde_json::Value;

/// Transport that records every request and answers with a fixed response.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    status: StatusCode,
    body: Bytes,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn expected_response(&self) -> Response {
        Response::new(self.status, self.body.clone())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(Response::new(self.status, self.body.clone()))
    }
}

/// Transport whose every call fails.
#[derive(Debug, Clone, Default)]
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<Response, TransportError> {
        Err(TransportError::new("connection reset by peer"))
    }
}

pub const SECRET: &str = "sk_test_0123456789abcdef";
pub const BASE: &str = "http://paystack.test";

pub fn recording_client(transport: &RecordingTransport) -> Client {
    Client::builder()
        .secret_key(SECRET)
        .base_url(BASE)
        .transport(transport.clone())
        .build()
        .unwrap()
}

pub fn body_json(request: &HttpRequest) -> Value {
    let body = request.body.as_ref().expect("request has no body");
    serde_json::from_slice(body).unwrap()
}

/// Path and query of a recorded request, without the base URL.
pub fn path(request: &HttpRequest) -> &str {
    request
        .url
        .strip_prefix(BASE)
        .expect("request not sent to the test base url")
}

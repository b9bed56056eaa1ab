mod common;

use std::net::TcpListener;

use paystack_sdk::Paystack;
use paystack_sdk::client::{
    Client, ClientError, DEFAULT_USER_AGENT, Method, Response, StatusCode,
};
use paystack_sdk::objects::Envelope;
use paystack_sdk::objects::transaction::InitializedTransaction;
use paystack_sdk::params::{OptionalParam, QueryParam};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{FailingTransport, RecordingTransport, SECRET};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .secret_key(SECRET)
        .base_url(server.uri())
        .build()
        .expect("client")
}

#[tokio::test]
async fn sends_bearer_json_and_user_agent_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .and(header("authorization", format!("Bearer {SECRET}").as_str()))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .and(body_json(json!({
            "email": "customer@example.com",
            "amount": 50000,
            "currency": "NGN"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let paystack = Paystack::new(client_for(&server));
    let resp = paystack
        .transactions
        .initialize(
            "customer@example.com",
            50_000,
            [OptionalParam::currency("NGN")],
        )
        .await
        .expect("response");

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope<InitializedTransaction> = resp.envelope().unwrap();
    assert_eq!(envelope.data.unwrap().access_code, "0peioxfhpn");
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    let body = r#"{"status":false,"message":"Plan not found"}"#;
    Mock::given(method("GET"))
        .and(path("/plan/PLN_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let paystack = Paystack::new(client_for(&server));
    let resp = paystack.plans.fetch("PLN_missing").await.expect("response");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(!resp.is_success());
    assert_eq!(resp.body().as_ref(), body.as_bytes());
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server).get("/balance").await.expect("response");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.text(), "unavailable");
}

#[tokio::test]
async fn query_params_reach_the_server_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transaction"))
        .and(query_param("perPage", "20"))
        .and(query_param("status", "success"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let paystack = Paystack::new(client_for(&server));
    paystack
        .transactions
        .list(&[QueryParam::per_page(20), QueryParam::status("success")])
        .await
        .expect("response");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("perPage=20&status=success"));
}

#[tokio::test]
async fn get_without_body_sends_no_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let paystack = Paystack::new(client_for(&server));
    paystack.miscellaneous.list_countries().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn base_url_prefix_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/proxy/paystack/bank"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .secret_key(SECRET)
        .base_url(format!("{}/proxy/paystack/", server.uri()))
        .build()
        .unwrap();
    let resp = client.get("/bank").await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn request_into_deserializes_target() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/integration/payment_session_timeout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Payment session timeout retrieved",
            "data": {"payment_session_timeout": 30}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope: Envelope<Value> = client
        .request_into::<_, ()>(Method::GET, "/integration/payment_session_timeout", None)
        .await
        .unwrap();
    assert_eq!(envelope.data.unwrap()["payment_session_timeout"], json!(30));
}

#[tokio::test]
async fn request_into_reports_shape_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request_into::<Envelope<Value>, ()>(Method::GET, "/bank", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Deserialize(_)));
}

#[tokio::test]
async fn missing_secret_key_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder()
        .base_url(server.uri())
        .build()
        .expect("construction does not need a key");
    let paystack = Paystack::new(client);

    let err = paystack.plans.list(&[]).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingSecretKey));
    let err = paystack
        .customers
        .create("a@example.com", [])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingSecretKey));
    let err = paystack.transfer_control.balance().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingSecretKey));

    let keyed_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plan"))
        .and(header("authorization", format!("Bearer {SECRET}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&keyed_server)
        .await;

    let with_key = Paystack::new(client_for(&keyed_server));
    assert!(with_key.plans.list(&[]).await.is_ok());
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener); // nothing listens here any more

    let client = Client::builder()
        .secret_key(SECRET)
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = client.get("/balance").await.unwrap_err();
    match err {
        ClientError::Transport(inner) => assert!(inner.as_reqwest().is_some()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_transport_error_is_surfaced() {
    let client = Client::builder()
        .secret_key(SECRET)
        .transport(FailingTransport)
        .build()
        .unwrap();

    let err = client.get("/balance").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.to_string().contains("connection reset"));
}

#[tokio::test]
async fn unserializable_body_is_serialize_error() {
    use std::collections::HashMap;

    // JSON object keys must be strings.
    let mut body = HashMap::new();
    body.insert(vec![1u8], 1);

    let transport = RecordingTransport::new(StatusCode::OK, "{}");
    let client = common::recording_client(&transport);
    let err = client.post("/charge", &body).await.unwrap_err();
    assert!(matches!(err, ClientError::Serialize(_)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let transport = RecordingTransport::new(StatusCode::OK, "{}");
    let paystack = Paystack::new(common::recording_client(&transport));

    let mut handles = Vec::new();
    for i in 0..8 {
        let plans = paystack.plans.clone();
        handles.push(tokio::spawn(async move { plans.fetch(i).await }));
    }
    for handle in handles {
        let resp: Response = handle.await.unwrap().unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let mut paths: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| common::path(r).to_owned())
        .collect();
    paths.sort();
    assert_eq!(paths.len(), 8);
    assert_eq!(paths[0], "/plan/0");
}

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use medmentor::application::ports::{AdvisorClient, AdvisorClientError};
use medmentor::domain::{ChatTurn, ConfidenceLevel, MessageRole};
use medmentor::infrastructure::http::HttpAdvisorClient;

type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

async fn start_mock_advisor(
    response_status: u16,
    response_body: &'static str,
) -> (String, Captured, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: Captured = Arc::default();

    let app = Router::new()
        .route(
            "/functions/v1/drug-advisor",
            post(
                move |State(captured): State<Captured>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| async move {
                    captured.lock().unwrap().push((headers, body));
                    let status = StatusCode::from_u16(response_status).unwrap();
                    (
                        status,
                        [("content-type", "application/json")],
                        response_body,
                    )
                        .into_response()
                },
            ),
        )
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let advisor_url = format!("http://{}/functions/v1/drug-advisor", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (advisor_url, captured, shutdown_tx)
}

fn history() -> Vec<ChatTurn> {
    vec![ChatTurn::new(MessageRole::User, "Why is metformin taken?")]
}

#[tokio::test]
async fn given_success_reply_when_advising_over_http_then_reply_is_decoded() {
    let body = r#"{"response":"For type 2 diabetes.","confidence_level":"high","evidence_sources":[{"source":"ADA guidelines"}]}"#;
    let (url, captured, shutdown_tx) = start_mock_advisor(200, body).await;
    let client = HttpAdvisorClient::new(url, "anon-key".to_string());

    let reply = client.advise(&history()).await.unwrap();

    assert_eq!(reply.response, "For type 2 diabetes.");
    assert_eq!(reply.confidence_level, ConfidenceLevel::High);
    assert_eq!(reply.evidence_sources[0].source, "ADA guidelines");

    let requests = captured.lock().unwrap().clone();
    let (headers, sent) = &requests[0];
    assert_eq!(headers["apikey"], "anon-key");
    assert_eq!(headers["authorization"], "Bearer anon-key");
    assert_eq!(
        sent,
        &json!({ "messages": [{ "role": "user", "content": "Why is metformin taken?" }] })
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_api_key_when_advising_over_http_then_auth_headers_are_omitted() {
    let body = r#"{"response":"ok","confidence_level":"low"}"#;
    let (url, captured, shutdown_tx) = start_mock_advisor(200, body).await;
    let client = HttpAdvisorClient::new(url, String::new());

    client.advise(&history()).await.unwrap();

    let requests = captured.lock().unwrap().clone();
    assert!(!requests[0].0.contains_key("apikey"));
    assert!(!requests[0].0.contains_key("authorization"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_statuses_when_advising_over_http_then_they_map_to_client_errors() {
    let cases = [
        (429, AdvisorClientError::RateLimited),
        (402, AdvisorClientError::QuotaExhausted),
        (500, AdvisorClientError::Failed { status: 500 }),
    ];

    for (status, expected) in cases {
        let (url, _captured, shutdown_tx) = start_mock_advisor(status, r#"{"error":"x"}"#).await;
        let client = HttpAdvisorClient::new(url, "k".to_string());

        let err = client.advise(&history()).await.unwrap_err();

        assert_eq!(err, expected);
        shutdown_tx.send(()).ok();
    }
}

#[tokio::test]
async fn given_undecodable_success_body_when_advising_over_http_then_failed_is_returned() {
    let (url, _captured, shutdown_tx) = start_mock_advisor(200, r#"{"unexpected":true}"#).await;
    let client = HttpAdvisorClient::new(url, "k".to_string());

    let err = client.advise(&history()).await.unwrap_err();

    assert_eq!(err, AdvisorClientError::Failed { status: 200 });
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_nothing_listening_when_advising_over_http_then_unreachable_is_returned() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = HttpAdvisorClient::new(format!("http://{}/advisor", addr), "k".to_string());

    let err = client.advise(&history()).await.unwrap_err();

    assert!(matches!(err, AdvisorClientError::Unreachable(_)));
}

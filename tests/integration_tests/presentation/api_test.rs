use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use medmentor::application::services::{AdvisorService, PromptAssembler};
use medmentor::domain::{AdviceReply, ConfidenceLevel, EvidenceSource, InteractionFact};
use medmentor::infrastructure::llm::MockModelGateway;
use medmentor::infrastructure::observability::REQUEST_ID_HEADER;
use medmentor::infrastructure::persistence::InMemoryInteractionStore;
use medmentor::presentation::{AppState, DRUG_ADVISOR_PATH, create_router};

const TEST_MATCH_LIMIT: usize = 5;
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn warfarin_aspirin() -> InteractionFact {
    InteractionFact {
        drug_a: "Warfarin".to_string(),
        drug_b: "Aspirin".to_string(),
        interaction_type: "major".to_string(),
        summary: "Increased bleeding risk.".to_string(),
        mechanism: "Additive antiplatelet and anticoagulant effects.".to_string(),
        safety_advice: "Avoid unless directed by a physician.".to_string(),
        evidence_source: "Clinical Pharmacology".to_string(),
        confidence_level: "high".to_string(),
    }
}

fn create_test_app(gateway: MockModelGateway) -> axum::Router {
    let store = Arc::new(InMemoryInteractionStore::new(vec![warfarin_aspirin()]));
    let assembler = PromptAssembler::new(store, "MedMentor RAG".to_string(), TEST_MATCH_LIMIT);
    let advisor_service = Arc::new(AdvisorService::new(assembler, Arc::new(gateway)));

    create_router(AppState::new(advisor_service))
}

fn advice_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(DRUG_ADVISOR_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn warfarin_question() -> Value {
    json!({ "messages": [{ "role": "user", "content": "warfarin" }] })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors_headers(response: &axum::response::Response) {
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        response.headers()["access-control-allow-headers"],
        ALLOWED_HEADERS
    );
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let app = create_test_app(MockModelGateway::with_plain_content("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn given_preflight_when_calling_advisor_then_returns_no_content_with_cors_headers() {
    let app = create_test_app(MockModelGateway::with_plain_content("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri(DRUG_ADVISOR_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_cors_headers(&response);
}

#[tokio::test]
async fn given_structured_model_reply_when_calling_advisor_then_returns_reply_body() {
    let reply = AdviceReply::new(
        "Combining warfarin and aspirin raises bleeding risk. This is not medical advice.",
        ConfidenceLevel::High,
        vec![EvidenceSource::new(
            "Clinical Pharmacology",
            Some("Increased bleeding risk.".to_string()),
        )],
    );
    let app = create_test_app(MockModelGateway::with_advice(&reply));

    let response = app.oneshot(advice_request(warfarin_question())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert_eq!(
        body_json(response).await,
        json!({
            "response": "Combining warfarin and aspirin raises bleeding risk. This is not medical advice.",
            "confidence_level": "high",
            "evidence_sources": [
                { "source": "Clinical Pharmacology", "snippet": "Increased bleeding risk." }
            ]
        })
    );
}

#[tokio::test]
async fn given_model_without_tool_call_when_calling_advisor_then_returns_low_confidence_fallback() {
    let app = create_test_app(MockModelGateway::with_plain_content("Please consult a doctor."));

    let response = app.oneshot(advice_request(warfarin_question())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "response": "Please consult a doctor.",
            "confidence_level": "low",
            "evidence_sources": []
        })
    );
}

#[tokio::test]
async fn given_upstream_rate_limit_when_calling_advisor_then_returns_429_with_message() {
    let app = create_test_app(MockModelGateway::with_status(429));

    let response = app.oneshot(advice_request(warfarin_question())).await.unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_cors_headers(&response);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Rate limit exceeded. Please try again in a moment." })
    );
}

#[tokio::test]
async fn given_upstream_quota_exhausted_when_calling_advisor_then_returns_402_with_message() {
    let app = create_test_app(MockModelGateway::with_status(402));

    let response = app.oneshot(advice_request(warfarin_question())).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "AI credits depleted. Please add credits to continue." })
    );
}

#[tokio::test]
async fn given_upstream_failure_when_calling_advisor_then_returns_500_with_status_in_message() {
    let app = create_test_app(MockModelGateway::with_status(503));

    let response = app.oneshot(advice_request(warfarin_question())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(&response);
    assert_eq!(body_json(response).await, json!({ "error": "AI API error: 503" }));
}

#[tokio::test]
async fn given_malformed_body_when_calling_advisor_then_returns_500_with_error_field() {
    let app = create_test_app(MockModelGateway::with_plain_content("unused"));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(DRUG_ADVISOR_PATH)
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn given_unknown_role_when_calling_advisor_then_returns_500() {
    let app = create_test_app(MockModelGateway::with_plain_content("unused"));

    let response = app
        .oneshot(advice_request(
            json!({ "messages": [{ "role": "tool", "content": "x" }] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn given_request_id_header_when_calling_then_it_is_echoed() {
    let app = create_test_app(MockModelGateway::with_plain_content("ok"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "test-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "test-123");
}

#[tokio::test]
async fn given_no_request_id_header_when_calling_then_one_is_generated() {
    let app = create_test_app(MockModelGateway::with_plain_content("ok"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

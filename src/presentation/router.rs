use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::cors::cors_middleware;
use crate::presentation::handlers::{drug_advisor_handler, health_handler};
use crate::presentation::state::AppState;

pub const DRUG_ADVISOR_PATH: &str = "/functions/v1/drug-advisor";

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(DRUG_ADVISOR_PATH, post(drug_advisor_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{ModelGatewayError, QUOTA_EXHAUSTED_MESSAGE, RATE_LIMIT_MESSAGE};
use crate::application::services::AdvisorError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures of the advisor endpoint. The status code is the only
/// machine-readable signal; the body carries a short message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("rate limited")]
    RateLimited,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("{0}")]
    Internal(String),
}

impl From<AdvisorError> for ApiError {
    fn from(e: AdvisorError) -> Self {
        match e {
            AdvisorError::Gateway(ModelGatewayError::RateLimited) => ApiError::RateLimited,
            AdvisorError::Gateway(ModelGatewayError::QuotaExhausted) => ApiError::QuotaExhausted,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE.to_string()),
            ApiError::QuotaExhausted => {
                (StatusCode::PAYMENT_REQUIRED, QUOTA_EXHAUSTED_MESSAGE.to_string())
            }
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

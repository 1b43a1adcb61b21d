use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use super::api_error::ApiError;
use crate::domain::{AdviceReply, ChatTurn};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub messages: Vec<ChatTurn>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn drug_advisor_handler(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> Result<Json<AdviceReply>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection.body_text(), "Error in drug-advisor request body");
        ApiError::Internal(rejection.body_text())
    })?;

    tracing::info!(messages = request.messages.len(), "Received messages");

    match state.advisor_service.advise(&request.messages).await {
        Ok(reply) => {
            tracing::info!("Returning structured response");
            Ok(Json(reply))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in drug-advisor function");
            Err(ApiError::from(e))
        }
    }
}

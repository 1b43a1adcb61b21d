use async_trait::async_trait;

use crate::domain::ChatTurn;

/// Remote chat-completion endpoint that is forced to answer through the
/// advice tool.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Submits `messages` (system prompt first) and returns the raw JSON reply.
    async fn complete(&self, messages: &[ChatTurn]) -> Result<serde_json::Value, ModelGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelGatewayError {
    #[error("model gateway api key not configured")]
    NotConfigured,
    #[error("rate limited")]
    RateLimited,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("AI API error: {status}")]
    Upstream { status: u16, body: String },
    #[error("model gateway unreachable: {0}")]
    Unreachable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

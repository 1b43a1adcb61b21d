use async_trait::async_trait;

use crate::domain::{AdviceReply, ChatTurn};

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again in a moment.";
pub const QUOTA_EXHAUSTED_MESSAGE: &str = "AI credits depleted. Please add credits to continue.";

/// What a chat session talks to when it needs an answer.
#[async_trait]
pub trait AdvisorClient: Send + Sync {
    async fn advise(&self, messages: &[ChatTurn]) -> Result<AdviceReply, AdvisorClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisorClientError {
    #[error("rate limited")]
    RateLimited,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("advisor failed with status {status}")]
    Failed { status: u16 },
    #[error("advisor unreachable: {0}")]
    Unreachable(String),
}

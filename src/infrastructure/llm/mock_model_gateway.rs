use std::sync::Mutex;

use serde_json::{Value, json};

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::domain::{AdviceReply, ChatTurn};

use super::openai_gateway::ADVICE_TOOL_NAME;

/// Gateway double that replays one canned outcome and records every request.
pub struct MockModelGateway {
    outcome: Outcome,
    requests: Mutex<Vec<Vec<ChatTurn>>>,
}

enum Outcome {
    Reply(Value),
    Status(u16),
    Unreachable,
}

impl MockModelGateway {
    /// Replies with a well-formed forced tool call carrying `reply`.
    pub fn with_advice(reply: &AdviceReply) -> Self {
        let arguments = serde_json::to_string(reply).unwrap_or_default();
        Self::with_raw_reply(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_0",
                        "type": "function",
                        "function": { "name": ADVICE_TOOL_NAME, "arguments": arguments }
                    }]
                }
            }]
        }))
    }

    /// Replies with plain content and no tool call.
    pub fn with_plain_content(content: &str) -> Self {
        Self::with_raw_reply(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        }))
    }

    pub fn with_raw_reply(raw: Value) -> Self {
        Self::from_outcome(Outcome::Reply(raw))
    }

    /// Fails the way the real gateway does for a non-2xx `status`.
    pub fn with_status(status: u16) -> Self {
        Self::from_outcome(Outcome::Status(status))
    }

    pub fn unreachable() -> Self {
        Self::from_outcome(Outcome::Unreachable)
    }

    fn from_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ChatTurn>> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ModelGateway for MockModelGateway {
    async fn complete(&self, messages: &[ChatTurn]) -> Result<Value, ModelGatewayError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(messages.to_vec());
        }

        match &self.outcome {
            Outcome::Reply(raw) => Ok(raw.clone()),
            Outcome::Status(429) => Err(ModelGatewayError::RateLimited),
            Outcome::Status(402) => Err(ModelGatewayError::QuotaExhausted),
            Outcome::Status(status) => Err(ModelGatewayError::Upstream {
                status: *status,
                body: String::new(),
            }),
            Outcome::Unreachable => Err(ModelGatewayError::Unreachable(
                "connection refused".to_string(),
            )),
        }
    }
}

use serde_json::Value;

use crate::domain::{AdviceReply, ConfidenceLevel};

pub const FALLBACK_RESPONSE: &str = "Unable to generate response";

/// Outcome of reading a chat-completion reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The forced tool call was present and its arguments matched the schema.
    Structured(AdviceReply),
    /// No usable tool call; plain content with low confidence.
    Fallback(AdviceReply),
}

impl Extraction {
    pub fn is_structured(&self) -> bool {
        matches!(self, Extraction::Structured(_))
    }

    pub fn reply(&self) -> &AdviceReply {
        match self {
            Extraction::Structured(reply) | Extraction::Fallback(reply) => reply,
        }
    }

    pub fn into_reply(self) -> AdviceReply {
        match self {
            Extraction::Structured(reply) | Extraction::Fallback(reply) => reply,
        }
    }
}

/// Pulls the advice out of `choices[0].message`. Never fails.
pub fn extract_advice(raw: &Value) -> Extraction {
    let message = &raw["choices"][0]["message"];

    match parse_tool_arguments(&message["tool_calls"][0]["function"]["arguments"]) {
        Ok(reply) => Extraction::Structured(reply),
        Err(reason) => {
            tracing::warn!(reason = %reason, "Structured advice missing, falling back to message content");
            let response = message["content"]
                .as_str()
                .filter(|content| !content.is_empty())
                .unwrap_or(FALLBACK_RESPONSE);
            Extraction::Fallback(AdviceReply::new(response, ConfidenceLevel::Low, Vec::new()))
        }
    }
}

fn parse_tool_arguments(arguments: &Value) -> Result<AdviceReply, String> {
    match arguments {
        Value::String(raw) if !raw.is_empty() => {
            serde_json::from_str(raw).map_err(|e| format!("unparseable arguments: {}", e))
        }
        Value::Object(_) => serde_json::from_value(arguments.clone())
            .map_err(|e| format!("arguments do not match schema: {}", e)),
        Value::Null => Err("no tool call".to_string()),
        _ => Err("empty or non-object arguments".to_string()),
    }
}

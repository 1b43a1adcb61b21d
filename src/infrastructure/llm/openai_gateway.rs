use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::ports::{ModelGateway, ModelGatewayError};
use crate::domain::ChatTurn;
use crate::presentation::config::GatewaySettings;

pub const ADVICE_TOOL_NAME: &str = "provide_drug_interaction_advice";

/// OpenAI-compatible chat-completion client that forces the advice tool.
pub struct OpenAiGateway {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatTurn],
    tools: Value,
    tool_choice: Value,
}

impl OpenAiGateway {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    pub fn from_settings(settings: &GatewaySettings) -> Self {
        Self::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Function definition whose parameters are the advice reply schema.
pub fn advice_tool() -> Value {
    json!([{
        "type": "function",
        "function": {
            "name": ADVICE_TOOL_NAME,
            "description": "Provide structured medical advice including drug interactions, medication purposes, and symptom guidance with safety warnings",
            "parameters": {
                "type": "object",
                "properties": {
                    "response": {
                        "type": "string",
                        "description": "Complete response with relevant sections based on query type (interaction summary/drug purpose/symptom guidance), mechanism, safety advice, and medical disclaimer"
                    },
                    "confidence_level": {
                        "type": "string",
                        "enum": ["low", "medium", "high"],
                        "description": "Confidence level based on evidence strength"
                    },
                    "evidence_sources": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "source": { "type": "string" },
                                "snippet": { "type": "string" }
                            },
                            "required": ["source"]
                        },
                        "description": "Array of evidence sources with optional snippets"
                    }
                },
                "required": ["response", "confidence_level"],
                "additionalProperties": false
            }
        }
    }])
}

fn forced_tool_choice() -> Value {
    json!({
        "type": "function",
        "function": { "name": ADVICE_TOOL_NAME }
    })
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    #[tracing::instrument(skip(self, messages), fields(model = %self.model, messages = messages.len()))]
    async fn complete(&self, messages: &[ChatTurn]) -> Result<Value, ModelGatewayError> {
        if self.api_key.is_empty() {
            tracing::error!("Model gateway API key is not configured");
            return Err(ModelGatewayError::NotConfigured);
        }

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            tools: advice_tool(),
            tool_choice: forced_tool_choice(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Model gateway request failed");
                ModelGatewayError::Unreachable(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "AI API error");

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => ModelGatewayError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => ModelGatewayError::QuotaExhausted,
                _ => ModelGatewayError::Upstream {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ModelGatewayError::InvalidResponse(e.to_string()))?;

        tracing::debug!("AI response received");
        Ok(raw)
    }
}

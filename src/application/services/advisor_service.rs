use std::sync::Arc;

use async_trait::async_trait;

use super::prompt_assembler::PromptAssembler;
use super::response_extractor::extract_advice;
use crate::application::ports::{
    AdvisorClient, AdvisorClientError, ModelGateway, ModelGatewayError,
};
use crate::domain::{AdviceReply, ChatTurn, MessageRole};
use crate::infrastructure::observability::sanitize_prompt;

/// Server side of a chat turn: retrieval, prompt assembly, the model call
/// and reply extraction.
pub struct AdvisorService {
    prompt_assembler: PromptAssembler,
    model_gateway: Arc<dyn ModelGateway>,
}

impl AdvisorService {
    pub fn new(prompt_assembler: PromptAssembler, model_gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            prompt_assembler,
            model_gateway,
        }
    }

    #[tracing::instrument(skip(self, messages), fields(history_len = messages.len()))]
    pub async fn advise(&self, messages: &[ChatTurn]) -> Result<AdviceReply, AdvisorError> {
        let latest = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        tracing::debug!(latest = %sanitize_prompt(latest), "Assembling advisor prompt");

        let prompt = self.prompt_assembler.assemble(latest).await;

        tracing::debug!(
            prompt_len = prompt.text.len(),
            matched_facts = prompt.matched_facts,
            "Prompt assembled"
        );

        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(ChatTurn::new(MessageRole::System, prompt.text));
        conversation.extend_from_slice(messages);

        let raw = self.model_gateway.complete(&conversation).await?;

        let extraction = extract_advice(&raw);
        tracing::info!(
            structured = extraction.is_structured(),
            confidence = %extraction.reply().confidence_level,
            evidence_count = extraction.reply().evidence_sources.len(),
            "Advice produced"
        );

        Ok(extraction.into_reply())
    }
}

#[async_trait]
impl AdvisorClient for AdvisorService {
    async fn advise(&self, messages: &[ChatTurn]) -> Result<AdviceReply, AdvisorClientError> {
        AdvisorService::advise(self, messages)
            .await
            .map_err(|e| match e {
                AdvisorError::Gateway(ModelGatewayError::RateLimited) => {
                    AdvisorClientError::RateLimited
                }
                AdvisorError::Gateway(ModelGatewayError::QuotaExhausted) => {
                    AdvisorClientError::QuotaExhausted
                }
                AdvisorError::Gateway(_) => AdvisorClientError::Failed { status: 500 },
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("{0}")]
    Gateway(#[from] ModelGatewayError),
}

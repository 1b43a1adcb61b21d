use super::{AdviceReply, ConfidenceLevel, ConversationId, EvidenceSource, MessageId, MessageRole};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub confidence_level: Option<ConfidenceLevel>,
    pub evidence_sources: Option<Vec<EvidenceSource>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// A plain message without confidence or evidence.
    pub fn new(conversation_id: ConversationId, role: MessageRole, content: String) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role,
            content,
            confidence_level: None,
            evidence_sources: None,
            created_at: Utc::now(),
        }
    }

    /// An assistant message carrying both confidence and evidence.
    pub fn assistant_reply(conversation_id: ConversationId, reply: AdviceReply) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id,
            role: MessageRole::Assistant,
            content: reply.response,
            confidence_level: Some(reply.confidence_level),
            evidence_sources: Some(reply.evidence_sources),
            created_at: Utc::now(),
        }
    }

    pub fn evidence(&self) -> &[EvidenceSource] {
        self.evidence_sources.as_deref().unwrap_or(&[])
    }

    /// Whether the confidence/evidence panel has anything to show.
    pub fn has_annotations(&self) -> bool {
        self.confidence_level.is_some() || !self.evidence().is_empty()
    }
}

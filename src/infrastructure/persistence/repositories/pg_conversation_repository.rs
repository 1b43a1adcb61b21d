use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{
    ConfidenceLevel, Conversation, ConversationId, EvidenceSource, Message, MessageId,
    MessageRole,
};

pub struct PgConversationRepository {
    pool: PgPool,
}

impl PgConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ConversationRow {
    id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    conversation_id: Uuid,
    role: String,
    content: String,
    confidence_level: Option<String>,
    evidence_sources: Option<Json<Vec<EvidenceSource>>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = RepositoryError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<MessageRole>()
            .map_err(RepositoryError::CorruptRow)?;
        let confidence_level = row
            .confidence_level
            .map(|level| level.parse::<ConfidenceLevel>())
            .transpose()
            .map_err(RepositoryError::CorruptRow)?;

        Ok(Message {
            id: MessageId::from_uuid(row.id),
            conversation_id: ConversationId::from_uuid(row.conversation_id),
            role,
            content: row.content,
            confidence_level,
            evidence_sources: row.evidence_sources.map(|Json(sources)| sources),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ConversationRepository for PgConversationRepository {
    #[instrument(skip(self))]
    async fn create_conversation(&self, title: &str) -> Result<Conversation, RepositoryError> {
        let row: ConversationRow = sqlx::query_as(
            r#"
            INSERT INTO chat_conversations (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Conversation {
            id: ConversationId::from_uuid(row.id),
            title: row.title,
            messages: Vec::new(),
            created_at: row.created_at,
        })
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        let row: Option<ConversationRow> = sqlx::query_as(
            r#"
            SELECT id, title, created_at
            FROM chat_conversations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => {
                let messages = self.get_messages(id).await?;

                Ok(Some(Conversation {
                    id: ConversationId::from_uuid(r.id),
                    title: r.title,
                    messages,
                    created_at: r.created_at,
                }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, message), fields(message_id = %message.id.as_uuid(), conversation_id = %message.conversation_id))]
    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages
                (id, conversation_id, role, content, confidence_level, evidence_sources, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(message.conversation_id.as_uuid())
        .bind(message.role.as_str())
        .bind(&message.content)
        .bind(message.confidence_level.map(|level| level.as_str()))
        .bind(message.evidence_sources.as_deref().map(Json))
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::NotFound(format!(
                    "conversation {}",
                    message.conversation_id
                ))
            }
            other => RepositoryError::QueryFailed(other.to_string()),
        })?;

        Ok(())
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn get_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, conversation_id, role, content, confidence_level, evidence_sources, created_at
            FROM chat_messages
            WHERE conversation_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(conversation_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(Message::try_from).collect()
    }
}

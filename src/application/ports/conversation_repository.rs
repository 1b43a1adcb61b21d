use crate::domain::{Conversation, ConversationId, Message};
use async_trait::async_trait;

use super::RepositoryError;

/// Append-only log of conversations and their messages.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Inserts a conversation and returns it with its store-generated id.
    async fn create_conversation(&self, title: &str) -> Result<Conversation, RepositoryError>;

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError>;

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError>;

    /// Messages of a conversation in insertion order.
    async fn get_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError>;
}

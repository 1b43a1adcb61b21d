use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{ConversationRepository, RepositoryError};
use crate::domain::{Conversation, ConversationId, Message};

/// Process-local conversation log, used by tests and the offline chat client.
#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: RwLock<HashMap<ConversationId, Conversation>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create_conversation(&self, title: &str) -> Result<Conversation, RepositoryError> {
        let conversation = Conversation {
            id: ConversationId::new(),
            title: title.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
        };

        self.conversations
            .write()
            .await
            .insert(conversation.id, conversation.clone());

        Ok(conversation)
    }

    async fn get_conversation(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        Ok(self.conversations.read().await.get(&id).cloned())
    }

    async fn append_message(&self, message: &Message) -> Result<(), RepositoryError> {
        let mut conversations = self.conversations.write().await;
        let conversation = conversations
            .get_mut(&message.conversation_id)
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("conversation {}", message.conversation_id))
            })?;
        conversation.messages.push(message.clone());
        Ok(())
    }

    async fn get_messages(
        &self,
        conversation_id: ConversationId,
    ) -> Result<Vec<Message>, RepositoryError> {
        Ok(self
            .conversations
            .read()
            .await
            .get(&conversation_id)
            .map(|c| c.messages.clone())
            .unwrap_or_default())
    }
}

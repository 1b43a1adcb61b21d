use std::sync::Arc;

use crate::application::ports::{
    AdvisorClient, AdvisorClientError, ChatView, ConversationRepository, Notification,
    QUOTA_EXHAUSTED_MESSAGE, RATE_LIMIT_MESSAGE,
};
use crate::domain::{
    ChatTurn, ConversationId, DEFAULT_CONVERSATION_TITLE, Message, MessageRole,
};
use crate::infrastructure::observability::sanitize_prompt;

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to get response from AI advisor";
pub const CREATE_CONVERSATION_FAILED_MESSAGE: &str = "Failed to create conversation";
pub const LOAD_CONVERSATION_FAILED_MESSAGE: &str = "Failed to load conversation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Active(ConversationId),
}

/// Client-side conversation: history, persistence and view updates.
///
/// `send` borrows the session mutably, so at most one advisor request is in
/// flight per session.
pub struct ChatSession<V: ChatView> {
    conversation_repository: Arc<dyn ConversationRepository>,
    advisor: Arc<dyn AdvisorClient>,
    view: V,
    state: SessionState,
    messages: Vec<Message>,
    is_loading: bool,
}

impl<V: ChatView> ChatSession<V> {
    pub fn new(
        conversation_repository: Arc<dyn ConversationRepository>,
        advisor: Arc<dyn AdvisorClient>,
        view: V,
    ) -> Self {
        Self {
            conversation_repository,
            advisor,
            view,
            state: SessionState::Empty,
            messages: Vec::new(),
            is_loading: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn conversation_id(&self) -> Option<ConversationId> {
        match self.state {
            SessionState::Empty => None,
            SessionState::Active(id) => Some(id),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Replaces the in-memory history with a persisted conversation.
    #[tracing::instrument(skip(self), fields(conversation_id = %conversation_id))]
    pub async fn resume(&mut self, conversation_id: ConversationId) -> Result<(), ChatError> {
        let conversation = match self
            .conversation_repository
            .get_conversation(conversation_id)
            .await
        {
            Ok(Some(conversation)) => conversation,
            Ok(None) => {
                tracing::warn!("Conversation not found");
                return Err(self.fail(ChatError::LoadConversationFailed));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load conversation");
                return Err(self.fail(ChatError::LoadConversationFailed));
            }
        };

        self.state = SessionState::Active(conversation.id);
        self.messages = conversation.messages;
        self.refresh();
        Ok(())
    }

    /// Sends one user utterance and waits for the advisor's reply.
    ///
    /// Failures are surfaced through the view and returned; the history is
    /// left as it was after the optimistic append.
    #[tracing::instrument(skip(self, content), fields(content = %sanitize_prompt(content)))]
    pub async fn send(&mut self, content: &str) -> Result<(), ChatError> {
        let content = content.trim();
        if content.is_empty() {
            tracing::debug!("Ignoring empty message");
            return Ok(());
        }

        let conversation_id = self.ensure_conversation().await?;

        let user_message = Message::new(conversation_id, MessageRole::User, content.to_string());
        self.messages.push(user_message.clone());
        self.refresh();
        self.persist(&user_message).await;

        let history: Vec<ChatTurn> = self.messages.iter().map(ChatTurn::from).collect();

        self.is_loading = true;
        self.view.render(&self.messages, true);

        let outcome = self.advisor.advise(&history).await;

        self.is_loading = false;

        match outcome {
            Ok(reply) => {
                let assistant_message = Message::assistant_reply(conversation_id, reply);
                self.messages.push(assistant_message.clone());
                self.refresh();
                self.persist(&assistant_message).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Advisor request failed");
                self.view.render(&self.messages, false);
                Err(self.fail(ChatError::from(e)))
            }
        }
    }

    async fn ensure_conversation(&mut self) -> Result<ConversationId, ChatError> {
        if let SessionState::Active(id) = self.state {
            return Ok(id);
        }

        match self
            .conversation_repository
            .create_conversation(DEFAULT_CONVERSATION_TITLE)
            .await
        {
            Ok(conversation) => {
                tracing::info!(conversation_id = %conversation.id, "Conversation created");
                self.state = SessionState::Active(conversation.id);
                Ok(conversation.id)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating conversation");
                Err(self.fail(ChatError::CreateConversationFailed))
            }
        }
    }

    async fn persist(&self, message: &Message) {
        if let Err(e) = self.conversation_repository.append_message(message).await {
            tracing::warn!(
                error = %e,
                message_id = %message.id.as_uuid(),
                role = %message.role,
                "Failed to save message"
            );
        }
    }

    fn refresh(&mut self) {
        self.view.render(&self.messages, self.is_loading);
        self.view.scroll_to_latest();
    }

    fn fail(&mut self, error: ChatError) -> ChatError {
        self.view.notify(&Notification::error(error.user_message()));
        error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("conversation could not be created")]
    CreateConversationFailed,
    #[error("conversation could not be loaded")]
    LoadConversationFailed,
    #[error("rate limited")]
    RateLimited,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("advisor failed with status {0}")]
    GatewayError(u16),
    #[error("advisor unreachable")]
    Unreachable,
}

impl ChatError {
    /// Short text for the error notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            ChatError::CreateConversationFailed => CREATE_CONVERSATION_FAILED_MESSAGE,
            ChatError::LoadConversationFailed => LOAD_CONVERSATION_FAILED_MESSAGE,
            ChatError::RateLimited => RATE_LIMIT_MESSAGE,
            ChatError::QuotaExhausted => QUOTA_EXHAUSTED_MESSAGE,
            ChatError::GatewayError(_) | ChatError::Unreachable => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<AdvisorClientError> for ChatError {
    fn from(e: AdvisorClientError) -> Self {
        match e {
            AdvisorClientError::RateLimited => ChatError::RateLimited,
            AdvisorClientError::QuotaExhausted => ChatError::QuotaExhausted,
            AdvisorClientError::Failed { status } => ChatError::GatewayError(status),
            AdvisorClientError::Unreachable(_) => ChatError::Unreachable,
        }
    }
}

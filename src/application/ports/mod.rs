mod advisor_client;
mod chat_view;
mod conversation_repository;
mod interaction_store;
mod model_gateway;
mod repository_error;

pub use advisor_client::{
    AdvisorClient, AdvisorClientError, QUOTA_EXHAUSTED_MESSAGE, RATE_LIMIT_MESSAGE,
};
pub use chat_view::{ChatView, Notification};
pub use conversation_repository::ConversationRepository;
pub use interaction_store::{InteractionStore, InteractionStoreError};
pub use model_gateway::{ModelGateway, ModelGatewayError};
pub use repository_error::RepositoryError;

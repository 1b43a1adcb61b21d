mod advice_reply;
mod chat_turn;
mod confidence_level;
mod conversation;
mod conversation_id;
mod evidence_source;
mod interaction_fact;
mod message;
mod message_id;
mod message_role;

pub use advice_reply::AdviceReply;
pub use chat_turn::ChatTurn;
pub use confidence_level::ConfidenceLevel;
pub use conversation::{Conversation, DEFAULT_CONVERSATION_TITLE};
pub use conversation_id::ConversationId;
pub use evidence_source::EvidenceSource;
pub use interaction_fact::InteractionFact;
pub use message::Message;
pub use message_id::MessageId;
pub use message_role::MessageRole;

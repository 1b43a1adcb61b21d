mod advisor_service;
mod chat_session;
mod prompt_assembler;
mod response_extractor;

pub use advisor_service::{AdvisorError, AdvisorService};
pub use chat_session::{
    CREATE_CONVERSATION_FAILED_MESSAGE, ChatError, ChatSession, GENERIC_FAILURE_MESSAGE,
    LOAD_CONVERSATION_FAILED_MESSAGE, SessionState,
};
pub use prompt_assembler::{
    AssembledPrompt, DEFAULT_MATCH_LIMIT, NO_DATA_CLAUSE, PromptAssembler, render_facts,
};
pub use response_extractor::{Extraction, FALLBACK_RESPONSE, extract_advice};

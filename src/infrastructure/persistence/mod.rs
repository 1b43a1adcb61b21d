mod interaction_store;
mod pg_pool;
mod repositories;

pub use interaction_store::{InMemoryInteractionStore, PgInteractionStore, contains_pattern};
pub use repositories::{InMemoryConversationRepository, PgConversationRepository};

pub use pg_pool::{connect_once, create_pool, run_migrations};

mod in_memory_interaction_store;
mod pg_interaction_store;

pub use in_memory_interaction_store::InMemoryInteractionStore;
pub use pg_interaction_store::{PgInteractionStore, contains_pattern};

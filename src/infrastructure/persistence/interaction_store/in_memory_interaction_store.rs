use tokio::sync::RwLock;

use crate::application::ports::{InteractionStore, InteractionStoreError};
use crate::domain::InteractionFact;

/// Interaction table held in memory; rows are matched in insertion order.
#[derive(Default)]
pub struct InMemoryInteractionStore {
    facts: RwLock<Vec<InteractionFact>>,
}

impl InMemoryInteractionStore {
    pub fn new(facts: Vec<InteractionFact>) -> Self {
        Self {
            facts: RwLock::new(facts),
        }
    }

    pub async fn insert(&self, fact: InteractionFact) {
        self.facts.write().await.push(fact);
    }
}

#[async_trait::async_trait]
impl InteractionStore for InMemoryInteractionStore {
    async fn find_matching(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<InteractionFact>, InteractionStoreError> {
        let needle = query.to_lowercase();

        Ok(self
            .facts
            .read()
            .await
            .iter()
            .filter(|f| {
                f.drug_a.to_lowercase().contains(&needle)
                    || f.drug_b.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect())
    }
}

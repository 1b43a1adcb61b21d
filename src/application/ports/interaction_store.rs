use async_trait::async_trait;

use crate::domain::InteractionFact;

/// Read-only lookup over the drug interaction reference table.
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Facts whose `drug_a` or `drug_b` contains `query`, compared
    /// case-insensitively, at most `limit` rows in a stable order.
    async fn find_matching(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<InteractionFact>, InteractionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InteractionStoreError {
    #[error("interaction lookup failed: {0}")]
    QueryFailed(String),
}

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{InteractionStore, InteractionStoreError};
use crate::domain::InteractionFact;

pub struct PgInteractionStore {
    pool: PgPool,
}

impl PgInteractionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InteractionRow {
    drug_a: String,
    drug_b: String,
    interaction_type: String,
    summary: String,
    mechanism: String,
    safety_advice: String,
    evidence_source: String,
    confidence_level: String,
}

impl From<InteractionRow> for InteractionFact {
    fn from(row: InteractionRow) -> Self {
        Self {
            drug_a: row.drug_a,
            drug_b: row.drug_b,
            interaction_type: row.interaction_type,
            summary: row.summary,
            mechanism: row.mechanism,
            safety_advice: row.safety_advice,
            evidence_source: row.evidence_source,
            confidence_level: row.confidence_level,
        }
    }
}

/// `%q%` with LIKE metacharacters in `q` taken literally.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl InteractionStore for PgInteractionStore {
    #[instrument(skip(self, query), fields(query_len = query.len(), limit = limit))]
    async fn find_matching(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<InteractionFact>, InteractionStoreError> {
        let rows: Vec<InteractionRow> = sqlx::query_as(
            r#"
            SELECT drug_a, drug_b, interaction_type, summary, mechanism,
                   safety_advice, evidence_source, confidence_level
            FROM drug_interactions
            WHERE drug_a ILIKE $1 ESCAPE '\' OR drug_b ILIKE $1 ESCAPE '\'
            ORDER BY id ASC
            LIMIT $2
            "#,
        )
        .bind(contains_pattern(query))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| InteractionStoreError::QueryFailed(e.to_string()))?;

        tracing::debug!(found = rows.len(), "Found interactions");
        Ok(rows.into_iter().map(InteractionFact::from).collect())
    }
}

use serde::{Deserialize, Serialize};

/// A known pairwise drug interaction, as stored in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFact {
    pub drug_a: String,
    pub drug_b: String,
    pub interaction_type: String,
    pub summary: String,
    pub mechanism: String,
    pub safety_advice: String,
    pub evidence_source: String,
    pub confidence_level: String,
}

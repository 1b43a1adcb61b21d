use serde::{Deserialize, Deserializer, Serialize};

use super::{ConfidenceLevel, EvidenceSource};

/// Structured answer produced by the advisor.
///
/// Doubles as the argument schema of the forced tool call and as the
/// success body of the advisor endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReply {
    pub response: String,
    pub confidence_level: ConfidenceLevel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub evidence_sources: Vec<EvidenceSource>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EvidenceSource>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EvidenceSource>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AdviceReply {
    pub fn new(
        response: impl Into<String>,
        confidence_level: ConfidenceLevel,
        evidence_sources: Vec<EvidenceSource>,
    ) -> Self {
        Self {
            response: response.into(),
            confidence_level,
            evidence_sources,
        }
    }
}

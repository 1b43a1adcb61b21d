use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl EvidenceSource {
    pub fn new(source: impl Into<String>, snippet: Option<String>) -> Self {
        Self {
            source: source.into(),
            snippet,
        }
    }
}

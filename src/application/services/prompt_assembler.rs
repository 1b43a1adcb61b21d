use std::fmt::Write;
use std::sync::Arc;

use crate::application::ports::InteractionStore;
use crate::domain::InteractionFact;
use crate::infrastructure::observability::sanitize_prompt;

pub const DEFAULT_MATCH_LIMIT: usize = 5;

pub const NO_DATA_CLAUSE: &str = "No matching drug interaction data was found in the database. \
Use your general medical knowledge but clearly state that the confidence level is lower.";

const FACTS_HEADING: &str = "Relevant Drug Interaction Data from Database:";

/// Builds the system instruction for the advisor model.
///
/// Retrieval is a single unranked substring lookup of the latest utterance
/// against the interaction table; whatever comes back (at most
/// `match_limit` rows) is listed verbatim after the fixed rules.
pub struct PromptAssembler {
    interaction_store: Arc<dyn InteractionStore>,
    assistant_name: String,
    match_limit: usize,
}

#[derive(Debug, Clone)]
pub struct AssembledPrompt {
    pub text: String,
    pub matched_facts: usize,
}

impl PromptAssembler {
    pub fn new(
        interaction_store: Arc<dyn InteractionStore>,
        assistant_name: String,
        match_limit: usize,
    ) -> Self {
        Self {
            interaction_store,
            assistant_name,
            match_limit,
        }
    }

    /// Looks up facts for `utterance` and renders the full instruction.
    ///
    /// A failed lookup is logged and treated as "nothing found".
    #[tracing::instrument(skip(self, utterance), fields(utterance = %sanitize_prompt(utterance)))]
    pub async fn assemble(&self, utterance: &str) -> AssembledPrompt {
        let facts = match self
            .interaction_store
            .find_matching(utterance, self.match_limit)
            .await
        {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!(error = %e, "Interaction lookup failed, continuing without data");
                Vec::new()
            }
        };

        tracing::debug!(matched_facts = facts.len(), "Interaction lookup finished");

        AssembledPrompt {
            text: self.build_system_prompt(&facts),
            matched_facts: facts.len(),
        }
    }

    pub fn build_system_prompt(&self, facts: &[InteractionFact]) -> String {
        let mut prompt = String::with_capacity(4096);

        let _ = writeln!(
            prompt,
            "You are {}, a medical AI safety advisor specializing in drug interactions, \
medication information, and symptom guidance.",
            self.assistant_name
        );
        prompt.push('\n');
        prompt.push_str(RESPONSE_LENGTH_RULE);
        prompt.push('\n');
        prompt.push_str(ROLE);
        prompt.push('\n');
        prompt.push_str(SAFETY_RULES);
        prompt.push('\n');
        prompt.push_str(QUERY_TEMPLATES);
        prompt.push('\n');

        if facts.is_empty() {
            prompt.push_str(NO_DATA_CLAUSE);
            prompt.push('\n');
        } else {
            prompt.push_str(&render_facts(facts));
        }

        prompt
    }
}

/// Numbered listing of facts, six fields each in fixed order.
pub fn render_facts(facts: &[InteractionFact]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", FACTS_HEADING);

    for (idx, fact) in facts.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. {} + {}:\n\
             - Type: {}\n\
             - Summary: {}\n\
             - Mechanism: {}\n\
             - Safety Advice: {}\n\
             - Evidence: {}\n\
             - Confidence: {}\n",
            idx + 1,
            fact.drug_a,
            fact.drug_b,
            fact.interaction_type,
            fact.summary,
            fact.mechanism,
            fact.safety_advice,
            fact.evidence_source,
            fact.confidence_level,
        );
    }

    out
}

const RESPONSE_LENGTH_RULE: &str = "RESPONSE LENGTH RULE:
- By default, provide SHORT, CONCISE answers (2-4 sentences maximum)
- Only provide detailed, comprehensive information if the user explicitly asks for \"detailed info\", \"brief info\", \"more information\", \"elaborate\", or similar requests
- Keep safety warnings brief but clear in short responses
";

const ROLE: &str = "Your role is to:
1. Answer drug interaction queries using retrieved medical data
2. Explain why specific medications are prescribed (indications/uses)
3. Suggest appropriate medications for common symptoms/conditions
4. Provide clear, evidence-based explanations in plain language
5. Always explain mechanisms when relevant
6. Include specific safety warnings
7. Cite evidence sources when available
8. Indicate confidence level (low/medium/high)
";

const SAFETY_RULES: &str = "CRITICAL SAFETY RULES:
- Always include \"This is not medical advice\" warning
- Always recommend consulting a healthcare professional
- Be cautious and conservative in your advice
- For symptom queries, suggest common over-the-counter options and emphasize seeing a doctor for proper diagnosis
- Never prescribe prescription medications for symptoms - only suggest consulting a doctor
- Clearly indicate interaction severity (major/moderate/minor) when relevant
- Never minimize serious drug interactions
- If unsure, say so and recommend medical consultation
";

const QUERY_TEMPLATES: &str = "Query Type Handling:

FOR DRUG INTERACTION QUERIES (\"Can I take X with Y?\"):
1. Summary of interaction
2. Mechanism explanation (why it happens)
3. Safety advice (what to do/avoid)
4. Evidence references
5. Confidence level

FOR DRUG PURPOSE QUERIES (\"Why is X taken?\" or \"What is X used for?\"):
1. Primary indications/uses
2. How it works (mechanism of action)
3. Common dosage information (general guidance only)
4. Important warnings or precautions
5. Confidence level

FOR SYMPTOM/CONDITION QUERIES (\"I have [symptom], what should I take?\"):
1. Acknowledge the symptom
2. Suggest common over-the-counter remedies (if appropriate)
3. When to take them (timing, with food, etc.)
4. Emphasize seeing a healthcare professional for proper diagnosis
5. List warning signs that require immediate medical attention
6. Confidence level
";

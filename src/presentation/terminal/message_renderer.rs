use crate::domain::{Message, MessageRole};

pub const EVIDENCE_HEADING: &str = "Evidence References:";
pub const EVIDENCE_BULLET: &str = "  > ";
pub const PENDING_INDICATOR: &str = "Advisor is thinking . . .";

/// Plain-text rendering of one chat message.
///
/// Assistant replies get a confidence badge and an evidence panel, but
/// only when there is something to put in them.
pub fn render_message(message: &Message) -> String {
    match message.role {
        MessageRole::User => format!("You: {}\n", message.content),
        MessageRole::System => format!("System: {}\n", message.content),
        MessageRole::Assistant => render_assistant(message),
    }
}

fn render_assistant(message: &Message) -> String {
    let mut out = format!("Advisor:\n{}\n", message.content);

    if !message.has_annotations() {
        return out;
    }

    out.push_str("----\n");

    if let Some(level) = message.confidence_level {
        out.push_str(&format!("[{}]\n", level.label()));
    }

    let evidence = message.evidence();
    if !evidence.is_empty() {
        out.push_str(EVIDENCE_HEADING);
        out.push('\n');
        for source in evidence {
            out.push_str(EVIDENCE_BULLET);
            out.push_str(&source.source);
            out.push('\n');
            if let Some(snippet) = source.snippet.as_deref().filter(|s| !s.is_empty()) {
                out.push_str(&format!("      \"{}\"\n", snippet));
            }
        }
    }

    out
}

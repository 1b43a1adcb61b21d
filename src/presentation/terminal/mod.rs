mod disclaimer;
mod message_renderer;
mod terminal_view;

pub use disclaimer::{EXAMPLE_QUESTIONS, MEDICAL_DISCLAIMER, example_question, welcome_banner};
pub use message_renderer::{EVIDENCE_BULLET, EVIDENCE_HEADING, PENDING_INDICATOR, render_message};
pub use terminal_view::TerminalView;

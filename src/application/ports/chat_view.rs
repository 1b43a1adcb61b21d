use crate::domain::Message;

/// A dismissible error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

/// Rendering surface driven by a chat session.
pub trait ChatView: Send {
    /// Redraws the history. While `is_loading` the input is disabled and a
    /// pending indicator is shown.
    fn render(&mut self, messages: &[Message], is_loading: bool);

    fn scroll_to_latest(&mut self);

    fn notify(&mut self, notification: &Notification);
}

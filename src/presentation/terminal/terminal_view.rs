use std::io::Write;

use crate::application::ports::{ChatView, Notification};
use crate::domain::{Message, MessageId};

use super::message_renderer::{PENDING_INDICATOR, render_message};

/// Append-only transcript on a writer. Messages already printed are not
/// printed again; a history that does not continue the printed one (a
/// resumed conversation) is printed from the start.
pub struct TerminalView<W: Write + Send> {
    out: W,
    printed: usize,
    last_printed: Option<MessageId>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: 0,
            last_printed: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn continues_printed(&self, messages: &[Message]) -> bool {
        match self.printed.checked_sub(1) {
            None => true,
            Some(idx) => messages.get(idx).map(|m| m.id) == self.last_printed,
        }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write + Send> ChatView for TerminalView<W> {
    fn render(&mut self, messages: &[Message], is_loading: bool) {
        if !self.continues_printed(messages) {
            self.printed = 0;
        }

        let pending: Vec<String> = messages[self.printed..]
            .iter()
            .map(render_message)
            .collect();
        for block in pending {
            self.write(&block);
            self.write("\n");
        }
        self.printed = messages.len();
        self.last_printed = messages.last().map(|m| m.id);

        if is_loading {
            self.write(PENDING_INDICATOR);
            self.write("\n");
        }
    }

    fn scroll_to_latest(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "Failed to flush terminal");
        }
    }

    fn notify(&mut self, notification: &Notification) {
        let line = format!("[{}] {}\n", notification.title, notification.description);
        self.write(&line);
        self.scroll_to_latest();
    }
}

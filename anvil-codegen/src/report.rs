//! User-facing outcome messages.

/// Heading for success and per-target notices.
pub const HEADING: &str = "Anvil";
/// Heading for errors.
pub const ERROR_HEADING: &str = "Error";
/// Heading for the follow-up line of an error.
pub const DETAILS_HEADING: &str = "Error Details";

/// One reported outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub heading: String,
    pub message: String,
    pub is_error: bool,
}

impl Message {
    pub fn new(heading: impl Into<String>, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            heading: heading.into(),
            message: message.into(),
            is_error,
        }
    }
}

/// Receives outcome messages.
///
/// The generation pipeline says *what* happened; implementations decide
/// how to show it (terminal, test recorder, ...).
pub trait MessageSink {
    fn message(&mut self, heading: &str, message: &str, is_error: bool);

    fn info(&mut self, message: &str) {
        self.message(HEADING, message, false);
    }

    fn error(&mut self, heading: &str, message: &str) {
        self.message(heading, message, true);
    }
}

impl MessageSink for Vec<Message> {
    fn message(&mut self, heading: &str, message: &str, is_error: bool) {
        self.push(Message::new(heading, message, is_error));
    }
}

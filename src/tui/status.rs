//! Temporary status messages shown in place of the footer hints.

use std::time::{Duration, Instant};

/// Manages a temporary status message with optional auto-clear.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    /// Create a status message manager that never auto-clears.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    /// Set a status message.
    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    /// Clear the status message.
    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message if its display time has run out.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Get the current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Check if there's an active message.
    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();

        assert!(!status.has_message());
        assert!(status.peek().is_none());

        status.set("Theme: light");
        assert!(status.has_message());
        assert_eq!(status.peek(), Some("Theme: light"));

        status.clear();
        assert!(!status.has_message());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(50));

        status.set("Auto clear message");
        status.expire();
        assert!(status.has_message());

        thread::sleep(Duration::from_millis(60));
        status.expire();
        assert!(!status.has_message());
    }

    #[test]
    fn test_status_message_no_auto_clear_default() {
        let mut status = StatusMessage::new();

        status.set("No auto clear");
        thread::sleep(Duration::from_millis(10));
        status.expire();
        assert!(status.has_message());
    }
}

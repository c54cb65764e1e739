//! Fire-and-forget user notifications.
//!
//! The dashboard surfaces outcomes as toast-style alerts; the core only
//! defines the contract. Delivery must never fail the operation being
//! reported on, so `notify` is infallible.

use serde::{Deserialize, Serialize};

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral information.
    Info,
    /// Operation completed.
    Success,
    /// Something needs attention but the operation went through.
    Warning,
    /// Operation failed.
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Severity.
    pub severity: Severity,
}

impl Notification {
    /// Creates a notification.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    /// Convenience constructor for error notifications, used when a
    /// server-side failure is reported without retry.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Error)
    }
}

/// Fire-and-forget notification sink.
pub trait NotificationSink: Send + Sync {
    /// Displays the notification; delivery failures are swallowed.
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<Notification>>);

    impl NotificationSink for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    #[test]
    fn test_sink_records_notifications() {
        let sink = Recorder(Mutex::new(Vec::new()));
        sink.notify(Notification::error("System error", "try again later"));
        sink.notify(Notification::new("Done", "transaction approved", Severity::Success));

        let seen = sink.0.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].severity, Severity::Error);
        assert_eq!(seen[1].severity, Severity::Success);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }
}

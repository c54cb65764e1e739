//! Notification sink that emits tracing events.

use trustbank_core::notification::{Notification, NotificationSink, Severity};

/// Emits each notification as a structured tracing event at a level
/// matching its severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            message,
            severity,
        } = notification;
        match severity {
            Severity::Info | Severity::Success => {
                tracing::info!(%title, %message, ?severity, "notification");
            }
            Severity::Warning => {
                tracing::warn!(%title, %message, "notification");
            }
            Severity::Error => {
                tracing::error!(%title, %message, "notification");
            }
        }
    }
}

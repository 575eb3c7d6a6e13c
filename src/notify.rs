// Notification sink
// The wizard's outbound toast boundary. The UI supplies its own sink; the
// crate ships a tracing-backed sink and an in-memory one for tests and
// embedding.

use parking_lot::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

pub trait NotificationSink: Send + Sync + 'static {
    fn publish(&self, notification: Notification);
}

// Sink that forwards notifications to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn publish(&self, notification: Notification) {
        match notification.severity {
            Severity::Success => info!(message = %notification.message, "notification"),
            Severity::Error => warn!(message = %notification.message, "notification"),
        }
    }
}

// Sink that buffers notifications for later inspection
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notes.lock())
    }

    pub fn last(&self) -> Option<Notification> {
        self.notes.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }
}

impl NotificationSink for MemoryNotifier {
    fn publish(&self, notification: Notification) {
        self.notes.lock().push(notification);
    }
}

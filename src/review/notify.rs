// src/review/notify.rs
use parking_lot::Mutex;
use std::sync::Arc;

/// Where the controller reports the outcome of a status update.
pub trait NotificationSink {
    fn notify_success(&self, message: &str);
    fn notify_failure(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

/// Collects notifications until the next page render drains them.
#[derive(Debug, Clone, Default)]
pub struct FlashSink {
    pending: Arc<Mutex<Vec<Flash>>>,
}

impl FlashSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Flash> {
        std::mem::take(&mut *self.pending.lock())
    }

    fn push(&self, kind: FlashKind, message: &str) {
        self.pending.lock().push(Flash {
            kind,
            message: message.to_string(),
        });
    }
}

impl NotificationSink for FlashSink {
    fn notify_success(&self, message: &str) {
        tracing::info!(message, "flash success");
        self.push(FlashKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        tracing::warn!(message, "flash failure");
        self.push(FlashKind::Failure, message);
    }
}

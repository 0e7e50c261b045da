// ABOUTME: User-facing notification surface
// ABOUTME: The user service reports one message per operation outcome through a Notifier

use std::sync::Mutex;
use tracing::info;

/// Displays a message to the user and returns once it has been shown
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sends notifications to the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("Notification: {}", message);
    }
}

/// Keeps every notification in order, for headless callers and tests
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}

//! User notification sink
//!
//! Stand-in for the blocking alert dialog of the device page. Fetch and
//! submit failures are pushed here with their transport status text.

use std::sync::Mutex;

/// Blocking user notification sink
pub trait Notifier: Send + Sync {
    /// Surface a message to the user
    fn notify(&self, message: &str);
}

/// Notifier writing to stderr, used by the CLI binary
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("! {message}");
    }
}

/// Notifier capturing messages so tests can assert on them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_string());
    }
}

//! Page rendering and user notification

pub mod notify;
pub mod render;

pub use notify::Notifier;

#[cfg(test)]
pub use notify::RecordingNotifier;

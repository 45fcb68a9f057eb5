//! User-notification seam.
//!
//! The dashboard surfaces operation outcomes as transient toasts; this
//! crate only knows the seam. The default implementation logs through
//! `tracing` so headless use still records what the user would have seen.

/// Sink for user-visible, transient notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: structured log records instead of toasts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notification = "error", "{message}");
    }
}

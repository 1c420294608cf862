//! No-op notifier for deployments without chat credentials.

use super::{Notifier, NotifyOutcome};
use async_trait::async_trait;
use tracing::debug;

/// A notifier that drops every message without any outbound call.
pub struct NullNotifier;

impl NullNotifier {
    /// Creates a new NullNotifier instance.
    pub fn new() -> Self {
        debug!("Using NullNotifier (notifications disabled)");
        Self
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _message: &str) -> NotifyOutcome {
        debug!("Notification skipped: notifier not configured");
        NotifyOutcome::Skipped
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

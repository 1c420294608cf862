//! Best-effort outbound notifications.
//!
//! A [`Notifier`] sends a short text message to an external chat service.
//! Delivery problems are logged by the implementation and reported only as a
//! [`NotifyOutcome`]; callers never receive an error and may ignore the
//! outcome entirely.
//!
//! - [`TelegramNotifier`] - Telegram Bot API `sendMessage`
//! - [`NullNotifier`] - used when credentials are not configured

pub mod null;
pub mod telegram;

pub use null::NullNotifier;
pub use telegram::{NotifyError, TelegramNotifier};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;

/// What happened to a notification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The remote service accepted the message.
    Sent,
    /// Notifications are not configured; nothing was sent.
    Skipped,
    /// The attempt failed; the reason has already been logged.
    Failed(String),
}

/// Sends a message to an external chat service.
///
/// Implementations make at most one outbound call per message, never retry,
/// and bound the call with a timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> NotifyOutcome;

    /// Returns true if messages can actually leave the process.
    fn is_enabled(&self) -> bool;
}

/// Builds the notifier selected by configuration.
///
/// Falls back to [`NullNotifier`] when credentials are missing or the HTTP
/// client cannot be constructed.
pub fn from_config(config: &Config) -> Arc<dyn Notifier> {
    match config.telegram() {
        Some(telegram) => match TelegramNotifier::new(telegram) {
            Ok(notifier) => {
                tracing::info!("Notifications enabled (Telegram)");
                Arc::new(notifier)
            }
            Err(e) => {
                tracing::warn!("Failed to build Telegram notifier: {}. Notifications disabled.", e);
                Arc::new(NullNotifier::new())
            }
        },
        None => {
            tracing::info!("Notifications disabled (no Telegram credentials)");
            Arc::new(NullNotifier::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            secret_key: "test".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_url: "https://api.telegram.org".to_string(),
            notify_timeout_seconds: 5,
            notify_on_visit: false,
            seed_links_file: None,
            db_max_connections: 5,
        }
    }

    #[tokio::test]
    async fn test_from_config_without_credentials_skips() {
        let notifier = from_config(&base_config());

        assert!(!notifier.is_enabled());
        assert_eq!(notifier.notify("hello").await, NotifyOutcome::Skipped);
    }

    #[test]
    fn test_from_config_with_credentials_enables() {
        let mut config = base_config();
        config.telegram_bot_token = Some("123:abc".to_string());
        config.telegram_chat_id = Some("42".to_string());

        let notifier = from_config(&config);

        assert!(notifier.is_enabled());
    }

    #[test]
    fn test_from_config_with_partial_credentials_disables() {
        let mut config = base_config();
        config.telegram_bot_token = Some("123:abc".to_string());

        assert!(!from_config(&config).is_enabled());
    }
}

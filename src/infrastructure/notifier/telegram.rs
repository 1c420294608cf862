//! Telegram Bot API notifier.

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{Notifier, NotifyOutcome};
use crate::config::TelegramConfig;

/// Reasons a single `sendMessage` call can fail.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid Telegram endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Request(reqwest::Error),
    #[error("Telegram responded with status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NotifyError::Timeout
        } else {
            NotifyError::Request(e)
        }
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends messages to one chat through the Telegram Bot API.
///
/// Every message is a single `POST {api_url}/bot{token}/sendMessage`, bounded
/// by the configured timeout and never retried.
pub struct TelegramNotifier {
    client: Client,
    endpoint: Url,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier from credentials and endpoint settings.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Endpoint`] if the API URL is malformed, or
    /// [`NotifyError::Request`] if the HTTP client cannot be built.
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let endpoint = send_message_url(&config.api_url, &config.bot_token)?;
        let client = build_http_client(config.timeout)?;

        Ok(Self {
            client,
            endpoint,
            chat_id: config.chat_id,
        })
    }

    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text: message,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> NotifyOutcome {
        match self.send(message).await {
            Ok(()) => {
                debug!("Telegram notification sent");
                NotifyOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, "Error sending Telegram notification");
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Builds `{api_url}/bot{token}/sendMessage`.
fn send_message_url(api_url: &str, bot_token: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/bot{}/sendMessage",
        api_url.trim_end_matches('/'),
        bot_token
    ))
}

fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    Client::builder()
        .default_headers(headers)
        .user_agent(concat!("link-redirector/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_url() {
        let url = send_message_url("https://api.telegram.org", "123:abc").unwrap();
        assert_eq!(url.as_str(), "https://api.telegram.org/bot123:abc/sendMessage");
    }

    #[test]
    fn test_send_message_url_trailing_slash() {
        let url = send_message_url("http://127.0.0.1:8081/", "t").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8081/bott/sendMessage");
    }

    #[test]
    fn test_send_message_url_rejects_garbage() {
        assert!(send_message_url("not a url", "t").is_err());
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        let result = TelegramNotifier::new(TelegramConfig {
            bot_token: "t".to_string(),
            chat_id: "1".to_string(),
            api_url: "::::".to_string(),
            timeout: Duration::from_secs(1),
        });

        assert!(matches!(result, Err(NotifyError::Endpoint(_))));
    }
}

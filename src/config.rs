//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured when present (loaded by the binaries via
//! `dotenvy`).
//!
//! ```bash
//! export DATABASE_URL="sqlite:urls.db"
//! export SECRET_KEY="change-me"
//! export TELEGRAM_BOT_TOKEN="123456:ABC..."
//! export TELEGRAM_CHAT_ID="-100123456"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite:urls.db`)
//! - `SECRET_KEY` - Flash cookie signing key (default: `dev`, logged as a warning)
//! - `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID` - Notification credentials;
//!   notifications are skipped unless both are set
//! - `TELEGRAM_API_URL` - Bot API base (default: `https://api.telegram.org`)
//! - `NOTIFY_TIMEOUT_SECONDS` - Outbound call timeout (default: 5, range 1-60)
//! - `NOTIFY_ON_VISIT` - Notify on every successful redirect (default: false)
//! - `SEED_LINKS_FILE` - JSON file of default links inserted at startup
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::entities::NewLink;

/// Signing key used when `SECRET_KEY` is not set.
pub const DEFAULT_SECRET_KEY: &str = "dev";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC key for flash cookies.
    pub secret_key: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_url: String,
    pub notify_timeout_seconds: u64,
    /// When true, every successful redirect triggers a background notification.
    pub notify_on_visit: bool,
    /// Optional JSON file with default links, seeded on every start.
    pub seed_links_file: Option<PathBuf>,
    pub db_max_connections: u32,
}

/// Settings needed to talk to the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let secret_key =
            env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string());

        let telegram_bot_token = non_empty_var("TELEGRAM_BOT_TOKEN");
        let telegram_chat_id = non_empty_var("TELEGRAM_CHAT_ID");
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .unwrap_or_else(|_| "https://api.telegram.org".to_string());

        let notify_timeout_seconds = parse_var("NOTIFY_TIMEOUT_SECONDS", 5)?;

        let notify_on_visit = env::var("NOTIFY_ON_VISIT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let seed_links_file = non_empty_var("SEED_LINKS_FILE").map(PathBuf::from);

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            secret_key,
            telegram_bot_token,
            telegram_chat_id,
            telegram_api_url,
            notify_timeout_seconds,
            notify_on_visit,
            seed_links_file,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - `secret_key` is empty
    /// - `notify_timeout_seconds` is outside 1-60
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.secret_key.is_empty() {
            anyhow::bail!("SECRET_KEY must not be empty");
        }

        if self.notify_timeout_seconds == 0 || self.notify_timeout_seconds > 60 {
            anyhow::bail!(
                "NOTIFY_TIMEOUT_SECONDS must be between 1 and 60, got {}",
                self.notify_timeout_seconds
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Returns Telegram settings if both bot token and chat id are present.
    pub fn telegram(&self) -> Option<TelegramConfig> {
        let bot_token = self.telegram_bot_token.clone()?;
        let chat_id = self.telegram_chat_id.clone()?;

        Some(TelegramConfig {
            bot_token,
            chat_id,
            api_url: self.telegram_api_url.clone(),
            timeout: Duration::from_secs(self.notify_timeout_seconds),
        })
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);

        if self.telegram().is_some() {
            tracing::info!(
                "  Telegram: enabled (token {}, chat {})",
                mask_secret(self.telegram_bot_token.as_deref().unwrap_or_default()),
                self.telegram_chat_id.as_deref().unwrap_or_default()
            );
        } else {
            tracing::info!("  Telegram: disabled");
        }

        if let Some(ref path) = self.seed_links_file {
            tracing::info!("  Seed file: {}", path.display());
        }

        tracing::info!("  Notify on visit: {}", self.notify_on_visit);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("SECRET_KEY is not set; using the development default");
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{key} must be a number, got '{v}'")),
        Err(_) => Ok(default),
    }
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `123456:ABCDEF` → `1234***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Reads default links from a JSON file of `{"name", "link"}` objects.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_seed_links(path: &Path) -> Result<Vec<NewLink>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("Seed file {} is not a valid link list", path.display()))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            secret_key: "test-secret".to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_url: "https://api.telegram.org".to_string(),
            notify_timeout_seconds: 5,
            notify_on_visit: false,
            seed_links_file: None,
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("123456:ABCDEF"), "1234***");
        assert_eq!(mask_secret("abc"), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:5000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite:urls.db".to_string();
        config.secret_key = String::new();
        assert!(config.validate().is_err());

        config.secret_key = "k".to_string();
        config.notify_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.notify_timeout_seconds = 61;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_telegram_requires_both_credentials() {
        let mut config = test_config();
        assert!(config.telegram().is_none());

        config.telegram_bot_token = Some("123:abc".to_string());
        assert!(config.telegram().is_none());

        config.telegram_chat_id = Some("42".to_string());
        let telegram = config.telegram().unwrap();
        assert_eq!(telegram.bot_token, "123:abc");
        assert_eq!(telegram.chat_id, "42");
        assert_eq!(telegram.timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("SECRET_KEY");
            env::remove_var("TELEGRAM_BOT_TOKEN");
            env::remove_var("TELEGRAM_CHAT_ID");
            env::remove_var("NOTIFY_ON_VISIT");
            env::remove_var("NOTIFY_TIMEOUT_SECONDS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite:urls.db");
        assert_eq!(config.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(config.notify_timeout_seconds, 5);
        assert!(!config.notify_on_visit);
        assert!(config.telegram().is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_treats_empty_credentials_as_missing() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("TELEGRAM_BOT_TOKEN", "");
            env::set_var("TELEGRAM_CHAT_ID", "42");
        }

        let config = Config::from_env().unwrap();
        assert!(config.telegram_bot_token.is_none());
        assert!(config.telegram().is_none());

        unsafe {
            env::remove_var("TELEGRAM_BOT_TOKEN");
            env::remove_var("TELEGRAM_CHAT_ID");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_timeout() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("NOTIFY_TIMEOUT_SECONDS", "soon");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("NOTIFY_TIMEOUT_SECONDS");
        }
    }

    #[test]
    fn test_load_seed_links() {
        let path = env::temp_dir().join(format!("seed-links-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"name": "docs", "link": "https://docs.rs"}, {"name": "crates", "link": "https://crates.io"}]"#,
        )
        .unwrap();

        let links = load_seed_links(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0], NewLink::new("docs", "https://docs.rs"));
    }

    #[test]
    fn test_load_seed_links_missing_file() {
        assert!(load_seed_links(Path::new("/nonexistent/seed.json")).is_err());
    }
}

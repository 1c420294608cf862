//! One-shot status messages carried across a redirect in a signed cookie.
//!
//! Form handlers redirect back to `/` after a mutation; the outcome travels in
//! a `flash` cookie that the index page renders once and then clears.
//!
//! # Cookie Format
//!
//! ```text
//! flash=<base64url("level:message")>.<hex HMAC-SHA256>
//! ```
//!
//! The MAC is keyed by `SECRET_KEY`. Cookies that fail verification are
//! ignored.

use axum::http::{HeaderMap, header::COOKIE};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie name used for flash messages.
pub const FLASH_COOKIE: &str = "flash";

/// Visual category of a flash message (maps to a CSS class).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "danger" => Some(FlashLevel::Danger),
            _ => None,
        }
    }
}

/// A status message shown once on the next page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

/// Signs and verifies flash cookies.
pub struct FlashSigner {
    mac: HmacSha256,
}

impl FlashSigner {
    /// Creates a signer keyed by `secret`.
    pub fn new(secret: &str) -> Self {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts any key length");
        Self { mac }
    }

    fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Encodes a flash into a signed cookie value.
    pub fn encode(&self, flash: &Flash) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{}:{}", flash.level.as_str(), flash.message));
        let signature = self.sign(&payload);
        format!("{payload}.{signature}")
    }

    /// Decodes a cookie value, returning `None` if it is malformed or the
    /// signature does not match.
    pub fn decode(&self, value: &str) -> Option<Flash> {
        let (payload, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let raw = String::from_utf8(URL_SAFE_NO_PAD.decode(payload).ok()?).ok()?;
        let (level, message) = raw.split_once(':')?;

        Some(Flash {
            level: FlashLevel::parse(level)?,
            message: message.to_string(),
        })
    }

    /// Builds a `Set-Cookie` value carrying `flash`.
    pub fn set_cookie(&self, flash: &Flash) -> String {
        format!(
            "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
            self.encode(flash)
        )
    }

    /// Builds a `Set-Cookie` value that removes the flash cookie.
    pub fn clear_cookie() -> String {
        format!("{FLASH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Reads and verifies the flash cookie from request headers.
    pub fn from_headers(&self, headers: &HeaderMap) -> Option<Flash> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|cookie_header| cookie_header.to_str().ok())
            .flat_map(|cookie_str| cookie_str.split(';'))
            .find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(FLASH_COOKIE), Some(value)) if !value.is_empty() => Some(value),
                    _ => None,
                }
            })
            .and_then(|value| self.decode(value))
    }
}

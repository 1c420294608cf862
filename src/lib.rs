//! # Link Redirector
//!
//! A small short-link service built with Axum and SQLite: named links
//! redirect to stored destinations, a single page manages them, and a
//! best-effort notifier reports activity to a Telegram chat.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and repository trait
//! - **Application Layer** ([`application`]) - Validation and link lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage and the notifier
//! - **API Layer** ([`api`]) - Redirects, JSON endpoints and notifications
//! - **Web Layer** ([`web`]) - Listing page and form handlers
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite:urls.db"
//! export SECRET_KEY="change-me"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink, SeedReport};
    pub use crate::error::AppError;
    pub use crate::infrastructure::notifier::{Notifier, NotifyOutcome};
    pub use crate::state::AppState;
}

//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementations
//! - [`notifier`] - Outbound chat notifications (Telegram or no-op)

pub mod notifier;
pub mod persistence;

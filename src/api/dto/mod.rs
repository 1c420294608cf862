//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request bodies that carry link
//! fields are checked with `validator`.

pub mod health;
pub mod link;
pub mod notify;

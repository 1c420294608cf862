//! HTTP request handlers for redirect and JSON endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod notify;
pub mod redirect;

pub use health::health_handler;
pub use links::{create_link_handler, list_links_handler};
pub use notify::{notify_handler, visit_notify_handler};
pub use redirect::redirect_handler;

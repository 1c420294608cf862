//! Browser-facing pages and form flows.
//!
//! Uses Askama templates for server-side rendering. Outcomes of form
//! submissions are carried to the next page load by [`flash`] cookies.
//!
//! - [`flash`] - Signed one-shot status messages
//! - [`handlers`] - Page rendering and form handlers
//! - [`routes`] - Route configuration

pub mod flash;
pub mod handlers;
pub mod routes;

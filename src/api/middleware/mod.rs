//! HTTP middleware for request processing.
//!
//! - [`tracing`] - request/response spans and latency logging
//! - [`cors`] - cross-origin access for browser clients

pub mod cors;
pub mod tracing;

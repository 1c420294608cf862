//! Small helpers shared across layers.
//!
//! - [`db_error`] - database error classification

pub mod db_error;

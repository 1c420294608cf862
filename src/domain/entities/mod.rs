//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is kept separate from stored rows:
//!
//! - [`Link`] - a stored mapping with its system-assigned id
//! - [`NewLink`] - a name/destination pair to insert, replace or seed
//! - [`SeedReport`] - counts returned by startup seeding

pub mod link;

pub use link::{Link, MAX_NAME_LEN, MAX_URL_LEN, NewLink, SeedReport};

//! HTML page and form handlers.

mod index;
mod links;

pub use index::{IndexTemplate, index_handler};
pub use links::{LinkForm, add_link_handler, delete_link_handler, edit_link_handler};

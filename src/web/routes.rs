//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{add_link_handler, delete_link_handler, edit_link_handler, index_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Listing page and form routes.
///
/// # Endpoints
///
/// - `GET  /`            - Link listing page
/// - `POST /`            - Create a link (form)
/// - `POST /edit/{id}`   - Edit a link (form)
/// - `GET  /delete/{id}` - Delete a link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(add_link_handler))
        .route("/edit/{id}", post(edit_link_handler))
        .route("/delete/{id}", get(delete_link_handler))
}

//! JSON API and notification route configuration.

use crate::api::handlers::{
    create_link_handler, health_handler, list_links_handler, notify_handler, visit_notify_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /links`  - List links, newest first
/// - `POST /links`  - Create a link
/// - `GET  /health` - Service health
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/health", get(health_handler))
}

/// Notification routes mounted at the root.
///
/// # Endpoints
///
/// - `POST /notify`         - Send a free-form notification
/// - `POST /telegram/send`  - Send a visit notification
pub fn notify_routes() -> Router<AppState> {
    Router::new()
        .route("/notify", post(notify_handler))
        .route("/telegram/send", post(visit_notify_handler))
}

//! Top-level router configuration combining page, redirect and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Link listing page
//! - `POST /`                 - Create a link (form)
//! - `POST /edit/{id}`        - Edit a link (form)
//! - `GET  /delete/{id}`      - Delete a link
//! - `GET  /{name}`           - Redirect to the stored destination
//! - `POST /notify`           - Free-form notification
//! - `POST /telegram/send`    - Visit notification
//! - `/api/*`                 - JSON API
//!
//! Static segments win over `/{name}`, so a link named `notify`, `edit`,
//! `delete`, `telegram` or `api` can be stored but never resolved.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// Paths are matched exactly; `/name/` is not the same as `/name`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::notify_routes())
        .route("/{name}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

//! Cross-origin resource sharing.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header.
///
/// The JSON listing and notification endpoints are called from pages served
/// on other origins, and no endpoint relies on cookies for authorization.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}

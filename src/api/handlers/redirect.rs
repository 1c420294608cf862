//! Handler for name → destination redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::json;
use tracing::debug;

use crate::error::{AppError, LINK_NOT_FOUND_MESSAGE};
use crate::state::AppState;

/// Bytes a `Location` header cannot carry verbatim. Non-ASCII is always
/// encoded; existing `%` escapes are left alone.
const LOCATION_UNSAFE: &AsciiSet = &CONTROLS.add(b' ');

/// Redirects a link name to its stored destination.
///
/// # Endpoint
///
/// `GET /{name}`
///
/// # Request Flow
///
/// 1. Look up the name (exact, case-sensitive)
/// 2. On a hit, answer `302 Found` with the stored URL in `Location`,
///    percent-encoding control characters, spaces and non-ASCII
/// 3. If visit notifications are enabled, send one from a detached task so
///    the redirect never waits on the chat service
///
/// # Errors
///
/// Returns `404` with body `Link not found` if the name is unknown.
pub async fn redirect_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.resolve(&name).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => {
            debug!(%name, "Redirect miss");
            return Ok((StatusCode::NOT_FOUND, LINK_NOT_FOUND_MESSAGE).into_response());
        }
        Err(e) => return Err(e),
    };

    let encoded = utf8_percent_encode(&link.url, LOCATION_UNSAFE).to_string();
    let location = HeaderValue::from_str(&encoded).map_err(|_| {
        AppError::internal(
            "Stored destination is not a valid Location header",
            json!({ "id": link.id }),
        )
    })?;

    if state.notify_on_visit {
        let notifier = state.notifier.clone();
        let message = format!("Link opened: /{}", link.name);
        tokio::spawn(async move {
            notifier.notify(&message).await;
        });
    }

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}

//! Handlers for the notification endpoints.
//!
//! Both endpoints hand the message to the configured notifier and report
//! success whatever the delivery outcome; delivery problems are only logged.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::dto::notify::{
    NotifyErrorResponse, NotifyRequest, NotifyResponse, VisitNotifyResponse,
};
use crate::state::AppState;

/// Fixed confirmation returned by the visit-tracking endpoint.
pub const VISIT_CONFIRMATION: &str = "A user opened link";

fn bad_request(error: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(NotifyErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Sends a free-form notification.
///
/// # Endpoint
///
/// `POST /notify` with body `{"message": "..."}`
///
/// # Responses
///
/// - `200 {"status": "success"}` once the notifier has been invoked
/// - `400 {"error": "message parameter is required"}` if the body is not
///   JSON or has no `message` key
pub async fn notify_handler(
    State(state): State<AppState>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> Response {
    let Some(message) = payload.ok().and_then(|Json(body)| body.message) else {
        return bad_request("message parameter is required");
    };

    let outcome = state.notifier.notify(&message).await;
    debug!(?outcome, "Notification handled");

    Json(NotifyResponse { status: "success" }).into_response()
}

/// Sends a notification that a visitor opened a link.
///
/// # Endpoint
///
/// `POST /telegram/send` with body `{"message": "..."}`
///
/// # Responses
///
/// - `200 {"status": "success", "message": "A user opened link"}`
/// - `400 {"error": "Message is required"}` if the message is missing or empty
pub async fn visit_notify_handler(
    State(state): State<AppState>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> Response {
    let message = payload
        .ok()
        .and_then(|Json(body)| body.message)
        .filter(|m| !m.is_empty());

    let Some(message) = message else {
        return bad_request("Message is required");
    };

    let outcome = state.notifier.notify(&message).await;
    debug!(?outcome, "Visit notification handled");

    Json(VisitNotifyResponse {
        status: "success",
        message: VISIT_CONFIRMATION,
    })
    .into_response()
}

//! Form handlers for creating, editing and deleting links.
//!
//! Every handler answers with `302 Found` to `/` and a flash cookie describing
//! the outcome. Unknown ids answer `404 Link not found` instead.

use axum::{
    Form,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{LOCATION, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::{AppError, LINK_NOT_FOUND_MESSAGE};
use crate::state::AppState;
use crate::web::flash::Flash;

/// Form body shared by create and edit.
///
/// Missing fields deserialize as empty strings so the service reports them
/// with its own message.
#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

/// Redirects to the listing page with a flash message.
fn back_to_index(state: &AppState, flash: Flash) -> Response {
    (
        StatusCode::FOUND,
        [
            (LOCATION, "/".to_string()),
            (SET_COOKIE, state.flash.set_cookie(&flash)),
        ],
    )
        .into_response()
}

fn link_not_found() -> Response {
    (StatusCode::NOT_FOUND, LINK_NOT_FOUND_MESSAGE).into_response()
}

/// Turns a service result into the form-flow response.
fn respond(state: &AppState, result: Result<(), AppError>, success: &str) -> Response {
    match result {
        Ok(()) => back_to_index(state, Flash::success(success)),
        Err(AppError::NotFound { .. }) => link_not_found(),
        Err(e @ (AppError::Validation { .. } | AppError::Conflict { .. })) => {
            back_to_index(state, Flash::danger(e.message()))
        }
        Err(e) => e.into_response(),
    }
}

/// Creates a link from the listing page form.
///
/// # Endpoint
///
/// `POST /` (form fields `name`, `link`)
pub async fn add_link_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Response {
    let result = state
        .link_service
        .create(form.name, form.link)
        .await
        .map(|_| ());

    respond(&state, result, "Link added!")
}

/// Replaces name and destination of a link.
///
/// # Endpoint
///
/// `POST /edit/{id}` (form fields `name`, `link`)
///
/// # Responses
///
/// - `302` to `/` with `Link updated!`, or with the validation/duplicate message
/// - `404` if the id is unknown
pub async fn edit_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Response {
    let result = state
        .link_service
        .update(id, form.name, form.link)
        .await
        .map(|_| ());

    respond(&state, result, "Link updated!")
}

/// Deletes a link.
///
/// # Endpoint
///
/// `GET /delete/{id}`
pub async fn delete_link_handler(Path(id): Path<i64>, State(state): State<AppState>) -> Response {
    let result = state.link_service.delete(id).await;

    respond(&state, result, "Link deleted!")
}

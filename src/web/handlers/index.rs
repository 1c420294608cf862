//! Link listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::flash::{Flash, FlashSigner};

/// Template for the link listing page.
///
/// Renders `templates/index.html` with:
/// - Pending flash message, if any
/// - Create form
/// - Every link, newest first, with inline edit and delete controls
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<Link>,
    pub flash: Option<Flash>,
}

/// Renders the link listing page and consumes the flash cookie.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let links = state.link_service.list().await?;
    let flash = state.flash.from_headers(&headers);
    let consumed = flash.is_some();

    let page = IndexTemplate { links, flash };

    if consumed {
        Ok(([(SET_COOKIE, FlashSigner::clear_cookie())], page).into_response())
    } else {
        Ok(page.into_response())
    }
}

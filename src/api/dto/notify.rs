//! DTOs for the notification endpoints.

use serde::{Deserialize, Serialize};

/// Request body for `POST /notify` and `POST /telegram/send`.
#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    pub message: Option<String>,
}

/// Success body for `POST /notify`.
#[derive(Debug, Serialize)]
pub struct NotifyResponse {
    pub status: &'static str,
}

/// Success body for `POST /telegram/send`.
#[derive(Debug, Serialize)]
pub struct VisitNotifyResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Error body for the notification endpoints: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct NotifyErrorResponse {
    pub error: String,
}

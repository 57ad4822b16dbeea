//! Contact form submission.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::{ContactSubmission, SUCCESS_MESSAGE, SUCCESS_NOTICE_DURATION};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
    /// How long to keep `message` on screen.
    pub notice_duration_secs: u64,
}

/// Validate and store one contact message.
///
/// Validation failures are 400 with a field-specific message; backend
/// failures are 502 with a generic one.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>> {
    let Json(submission) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    add_breadcrumb("contact", "Contact form submitted");
    state.contact().submit(&submission).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: SUCCESS_MESSAGE,
        notice_duration_secs: SUCCESS_NOTICE_DURATION.as_secs(),
    }))
}

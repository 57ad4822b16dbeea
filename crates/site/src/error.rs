//! Unified error handling with Sentry integration.
//!
//! Handlers return `Result<T, AppError>`. Server-side failures are captured
//! to Sentry before responding; clients only ever see a short message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{FAILURE_MESSAGE, SubmitError, TeamError};

/// Application-level error type for the site API.
#[derive(Debug, Error)]
pub enum AppError {
    /// A team member lookup failed.
    #[error("Team error: {0}")]
    Team(#[from] TeamError),

    /// A contact submission was not accepted.
    #[error("Submit error: {0}")]
    Submit(#[from] SubmitError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Team(TeamError::Fetch(_)) | Self::Submit(SubmitError::Rejected(_)) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Team(TeamError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Submit(SubmitError::Invalid(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to return to the client.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Team(TeamError::Fetch(_)) => FAILURE_MESSAGE.to_string(),
            Self::Team(TeamError::NotFound(_)) => "Anggota tim tidak ditemukan.".to_string(),
            Self::Submit(err) => err.user_message(),
            Self::BadRequest(_) => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for a visitor action.
///
/// Breadcrumbs appear in Sentry reports to show what led up to an error.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}

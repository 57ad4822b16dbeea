//! Contact form validation and submission.
//!
//! A submission is validated locally, then sent as one insert into
//! `contact_messages`. There is no retry: a failed send is reported once and
//! the caller decides whether to resubmit.

use std::sync::Arc;
use std::time::Duration;

use meteen_core::{Email, EmailError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::supabase::{DataSource, DataSourceError, NewContactMessage, Table};

/// Acknowledgment shown after a successful send.
pub const SUCCESS_MESSAGE: &str =
    "Terima kasih! Pesan Anda telah berhasil dikirim. Kami akan segera menghubungi Anda.";

/// Shown for any backend or transport failure.
pub const FAILURE_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";

/// How long the presentation layer keeps the success notice on screen.
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Raw form input, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// A required field is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nama wajib diisi.")]
    MissingName,
    #[error("Alamat email tidak valid.")]
    InvalidEmail(#[source] EmailError),
    #[error("Pesan wajib diisi.")]
    MissingMessage,
}

/// Why a submission was not accepted.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected before sending.
    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),

    /// The insert failed. Network errors and server-side rejections are not
    /// told apart.
    #[error("insert into contact_messages failed: {0}")]
    Rejected(#[source] DataSourceError),
}

impl SubmitError {
    /// Text safe to show the visitor.
    ///
    /// Validation problems name the field; everything else is generic.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(err) => err.to_string(),
            Self::Rejected(_) => FAILURE_MESSAGE.to_string(),
        }
    }
}

impl ContactSubmission {
    /// Trim and check the fields; an empty subject becomes absent.
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order.
    pub fn validate(&self) -> Result<NewContactMessage, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = Email::parse(&self.email).map_err(ValidationError::InvalidEmail)?;

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        let subject = self
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Ok(NewContactMessage {
            name: name.to_owned(),
            email: email.into_inner(),
            subject,
            message: message.to_owned(),
        })
    }
}

/// Sends contact messages to the backend.
#[derive(Clone)]
pub struct ContactService {
    source: Arc<dyn DataSource>,
}

impl ContactService {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Validate and insert one message.
    ///
    /// Not idempotent: each successful call stores a new row.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Invalid` without contacting the backend, or
    /// `SubmitError::Rejected` if the insert fails.
    #[instrument(skip_all)]
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let row = submission.validate().inspect_err(|e| {
            warn!(error = %e, "Contact submission failed validation");
        })?;

        let value = serde_json::to_value(&row)
            .map_err(|e| SubmitError::Rejected(DataSourceError::Parse(e)))?;

        self.source
            .insert(Table::ContactMessages, value)
            .await
            .map_err(|e| {
                error!(backend = self.source.backend_tag(), error = %e, "Contact message insert failed");
                SubmitError::Rejected(e)
            })?;

        info!(has_subject = row.subject.is_some(), "Contact message stored");
        Ok(())
    }
}

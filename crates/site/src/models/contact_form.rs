//! Contact page state: the fields being edited and the last submission outcome.

use serde::Serialize;

use crate::services::{ContactService, ContactSubmission, SUCCESS_MESSAGE};

/// Outcome of the most recent submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    /// Carries the visitor-facing message.
    Failed(String),
}

impl SubmissionState {
    /// Text to show next to the form, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Succeeded => Some(SUCCESS_MESSAGE),
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    state: SubmissionState,
}

impl ContactForm {
    #[must_use]
    pub fn new(fields: ContactSubmission) -> Self {
        Self {
            fields,
            state: SubmissionState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Send the current fields.
    ///
    /// Ignored while a previous submit is pending. On success the fields are
    /// cleared; on failure they are kept so the visitor can retry. If the
    /// returned future is dropped before it completes, the form goes back to
    /// `Idle` with its fields intact.
    pub async fn submit(&mut self, service: &ContactService) -> &SubmissionState {
        if self.state == SubmissionState::Pending {
            return &self.state;
        }

        {
            let pending = PendingGuard::enter(&mut self.state);
            let next = match service.submit(&self.fields).await {
                Ok(()) => {
                    self.fields = ContactSubmission::default();
                    SubmissionState::Succeeded
                }
                Err(err) => SubmissionState::Failed(err.user_message()),
            };
            pending.settle(next);
        }
        &self.state
    }

    /// Hide the success notice once it has been shown long enough.
    ///
    /// Only a `Succeeded` form changes; failure notices stay until the next
    /// submit.
    pub fn dismiss_notice(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Holds a form in `Pending` and resets it to `Idle` on drop unless settled.
struct PendingGuard<'a> {
    state: &'a mut SubmissionState,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn enter(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Pending;
        Self {
            state,
            settled: false,
        }
    }

    fn settle(mut self, next: SubmissionState) {
        *self.state = next;
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::services::FAILURE_MESSAGE;
    use crate::supabase::{DataSource, DataSourceError, MemoryDataSource, Query, Table};

    /// Backend whose inserts never complete.
    struct StalledSource;

    #[async_trait]
    impl DataSource for StalledSource {
        async fn select(&self, _query: &Query) -> Result<Vec<serde_json::Value>, DataSourceError> {
            Ok(Vec::new())
        }

        async fn insert(&self, _table: Table, _row: serde_json::Value) -> Result<(), DataSourceError> {
            std::future::pending().await
        }
    }

    fn filled() -> ContactForm {
        ContactForm::new(ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            subject: None,
            message: "hi".into(),
        })
    }

    fn service() -> (ContactService, MemoryDataSource) {
        let source = MemoryDataSource::new();
        (ContactService::new(Arc::new(source.clone())), source)
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_dismisses() {
        let (service, source) = service();
        let mut form = filled();

        assert_eq!(form.submit(&service).await, &SubmissionState::Succeeded);
        assert_eq!(form.fields, ContactSubmission::default());
        assert_eq!(form.state().notice(), Some(SUCCESS_MESSAGE));
        assert_eq!(source.rows(Table::ContactMessages).len(), 1);

        form.dismiss_notice();
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let (service, source) = service();
        source.set_fail_writes(true);
        let mut form = filled();

        let state = form.submit(&service).await.clone();
        assert_eq!(state, SubmissionState::Failed(FAILURE_MESSAGE.to_string()));
        assert_eq!(form.fields.name, "A");

        form.dismiss_notice();
        assert!(matches!(form.state(), SubmissionState::Failed(_)));
    }

    #[tokio::test]
    async fn test_pending_submit_is_ignored() {
        let (service, source) = service();
        let mut form = filled();
        form.state = SubmissionState::Pending;

        assert_eq!(form.submit(&service).await, &SubmissionState::Pending);
        assert_eq!(source.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_fields_show_specific_message() {
        let (service, _) = service();
        let mut form = filled();
        form.fields.message = "   ".into();

        assert_eq!(
            form.submit(&service).await,
            &SubmissionState::Failed("Pesan wajib diisi.".to_string())
        );
    }

    #[tokio::test]
    async fn test_cancelled_submit_returns_to_idle_and_can_resend() {
        let stalled = ContactService::new(Arc::new(StalledSource));
        let mut form = filled();

        let cancelled =
            tokio::time::timeout(Duration::from_millis(20), form.submit(&stalled)).await;
        assert!(cancelled.is_err());
        assert_eq!(form.state(), &SubmissionState::Idle);
        assert_eq!(form.fields.name, "A");

        let (service, source) = service();
        assert_eq!(form.submit(&service).await, &SubmissionState::Succeeded);
        assert_eq!(source.insert_count(), 1);
    }
}

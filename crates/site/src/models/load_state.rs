//! Lifecycle of a single remote read.

use serde::Serialize;

/// Shown in place of data when a read fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Gagal memuat data. Silakan coba lagi.";

/// Where a remote read stands.
///
/// Serializes as `{"state": "loaded", "data": ...}` so clients can switch on
/// one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Turn a fetch result into a settled state.
    ///
    /// The error's detail is logged by the fetcher; the state only keeps the
    /// visitor-facing message.
    pub fn settle<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(_) => Self::Failed(LOAD_FAILURE_MESSAGE.to_string()),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            Self::Idle => LoadState::Idle,
            Self::Loading => LoadState::Loading,
            Self::Loaded(value) => LoadState::Loaded(f(value)),
            Self::Failed(message) => LoadState::Failed(message),
        }
    }
}

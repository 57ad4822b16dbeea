//! Application state shared across handlers.

use std::sync::Arc;

use crate::services::{CatalogFetcher, ContactService, TeamDirectory};
use crate::supabase::DataSource;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Every service shares the one data source.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    source: Arc<dyn DataSource>,
    catalog: CatalogFetcher,
    team: TeamDirectory,
    contact: ContactService,
}

impl AppState {
    /// Build the services on top of `source`.
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog: CatalogFetcher::new(Arc::clone(&source)),
                team: TeamDirectory::new(Arc::clone(&source)),
                contact: ContactService::new(Arc::clone(&source)),
                source,
            }),
        }
    }

    /// The raw data source, for health probes.
    #[must_use]
    pub fn source(&self) -> &dyn DataSource {
        self.inner.source.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogFetcher {
        &self.inner.catalog
    }

    #[must_use]
    pub fn team(&self) -> &TeamDirectory {
        &self.inner.team
    }

    #[must_use]
    pub fn contact(&self) -> &ContactService {
        &self.inner.contact
    }
}

//! Business logic services for the site.
//!
//! # Services
//!
//! - `catalog` - Menu retrieval (full or featured) and client-side filtering
//! - `team` - Team roster and member lookup
//! - `contact` - Contact form validation and submission
//!
//! Each service holds an `Arc<dyn DataSource>` handed to it at construction
//! and performs exactly one backend request per call.

pub mod catalog;
pub mod contact;
pub mod team;

pub use catalog::{
    CatalogFetcher, CatalogMode, FEATURED_PREVIEW_LIMIT, FilterState, compute_visible,
};
pub use contact::{
    ContactService, ContactSubmission, FAILURE_MESSAGE, SUCCESS_MESSAGE,
    SUCCESS_NOTICE_DURATION, SubmitError, ValidationError,
};
pub use team::{TeamDirectory, TeamError};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::supabase::{DataSource, DataSourceError, Query, Table};

/// A read against the backend failed.
///
/// Callers turn this into an error state; it never reaches the process level.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query itself failed (transport, HTTP status, rate limit).
    #[error("query on {table} failed: {source}")]
    Query {
        table: Table,
        #[source]
        source: DataSourceError,
    },

    /// A returned row did not match the expected shape.
    #[error("malformed row in {table}: {source}")]
    Decode {
        table: Table,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Table the failed read targeted.
    #[must_use]
    pub const fn table(&self) -> Table {
        match self {
            Self::Query { table, .. } | Self::Decode { table, .. } => *table,
        }
    }
}

/// Run `query` and decode every row as `T`, preserving backend order.
pub(crate) async fn fetch_rows<T: DeserializeOwned>(
    source: &dyn DataSource,
    query: &Query,
) -> Result<Vec<T>, FetchError> {
    let table = query.table;
    let rows = source.select(query).await.map_err(|e| {
        error!(table = %table, backend = source.backend_tag(), error = %e, "Backend read failed");
        FetchError::Query { table, source: e }
    })?;

    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| {
                error!(table = %table, error = %e, "Backend row failed to decode");
                FetchError::Decode { table, source: e }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Query {
            table: Table::MenuItems,
            source: DataSourceError::RateLimited(3),
        };
        assert_eq!(
            err.to_string(),
            "query on menu_items failed: Rate limited, retry after 3 seconds"
        );
        assert_eq!(err.table(), Table::MenuItems);
    }
}

//! Data Source Client for the hosted Supabase backend.
//!
//! # Architecture
//!
//! - The backend exposes tables over PostgREST; we only need a small slice of
//!   it: select all columns, equality filters, ordering, limits and single-row
//!   inserts.
//! - [`DataSource`] is that slice as a trait. Services receive an
//!   `Arc<dyn DataSource>` at construction time, so tests can substitute
//!   [`MemoryDataSource`].
//! - Backend data is the source of truth - NO local cache. Every call re-queries.
//!
//! # Example
//!
//! ```rust,ignore
//! use meteen_site::supabase::{Direction, Query, SupabaseClient, Table};
//!
//! let client = SupabaseClient::new(&config.supabase)?;
//! let rows = client
//!     .select(
//!         &Query::from(Table::MenuItems)
//!             .eq("is_featured", true)
//!             .order("created_at", Direction::Descending)
//!             .limit(4),
//!     )
//!     .await?;
//! ```

mod client;
mod memory;
mod query;
pub mod types;

pub use client::SupabaseClient;
pub use memory::MemoryDataSource;
pub use query::{Direction, Filter, Ordering, Query, Table};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Client could not be built from configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend unreachable for a reason other than HTTP (used by test doubles).
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// The query/insert capability set the site depends on.
///
/// Rows travel as raw JSON objects; typed decoding happens in the services so
/// a malformed row is reported against the collection that produced it.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Short name for logs.
    fn backend_tag(&self) -> &'static str {
        "unknown"
    }

    /// Select every column of the rows matching `query`, in the requested order.
    async fn select(&self, query: &Query) -> Result<Vec<serde_json::Value>, DataSourceError>;

    /// Insert one row into `table`.
    async fn insert(&self, table: Table, row: serde_json::Value) -> Result<(), DataSourceError>;
}

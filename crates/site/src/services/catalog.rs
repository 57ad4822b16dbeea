//! Menu catalog retrieval and filtering.
//!
//! The fetcher returns rows exactly as the backend orders them. Filtering is
//! a pure, stable pass over that sequence so it can be recomputed on every
//! change of category or search text.

use std::num::NonZeroUsize;
use std::sync::Arc;

use meteen_core::MenuCategory;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{FetchError, fetch_rows};
use crate::supabase::{DataSource, Direction, MenuItem, Query, Table};

/// Number of featured dishes on the home page preview.
pub const FEATURED_PREVIEW_LIMIT: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// Which slice of the menu to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// Every item, ordered by category then name.
    All,
    /// Featured items only, newest first, at most `n`.
    FeaturedTop(NonZeroUsize),
}

impl CatalogMode {
    /// The home page preview.
    #[must_use]
    pub const fn featured_preview() -> Self {
        Self::FeaturedTop(FEATURED_PREVIEW_LIMIT)
    }

    fn query(self) -> Query {
        match self {
            Self::All => Query::from(Table::MenuItems)
                .order("category", Direction::Ascending)
                .order("name", Direction::Ascending),
            Self::FeaturedTop(n) => Query::from(Table::MenuItems)
                .eq("is_featured", true)
                .order("created_at", Direction::Descending)
                .limit(n.get()),
        }
    }
}

// =============================================================================
// Fetcher
// =============================================================================

/// Reads menu items from the backend.
#[derive(Clone)]
pub struct CatalogFetcher {
    source: Arc<dyn DataSource>,
}

impl CatalogFetcher {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Fetch the requested slice of the menu.
    ///
    /// An empty vector is a successful fetch of an empty menu.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the backend query fails or a row is malformed.
    #[instrument(skip(self))]
    pub async fn fetch(&self, mode: CatalogMode) -> Result<Vec<MenuItem>, FetchError> {
        let items: Vec<MenuItem> = fetch_rows(self.source.as_ref(), &mode.query()).await?;
        info!(count = items.len(), "Menu fetched");
        Ok(items)
    }
}

// =============================================================================
// Filter Engine
// =============================================================================

/// Category choice plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: MenuCategory,
    /// Matched case-insensitively against name and description; empty means no text filter.
    pub query: String,
}

impl FilterState {
    #[must_use]
    pub fn new(category: MenuCategory, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Whether `item` is visible under this filter.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.category.admits(&item.category) && text_matches(item, &self.query.to_lowercase())
    }
}

/// `needle` must already be lowercased.
fn text_matches(item: &MenuItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(needle)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// The subset of `catalog` visible under `filter`, in catalog order.
#[must_use]
pub fn compute_visible(catalog: &[MenuItem], filter: &FilterState) -> Vec<MenuItem> {
    let needle = filter.query.to_lowercase();
    catalog
        .iter()
        .filter(|item| filter.category.admits(&item.category) && text_matches(item, &needle))
        .cloned()
        .collect()
}

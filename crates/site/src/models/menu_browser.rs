//! Menu page state: the loaded catalog plus the visitor's filter.

use meteen_core::MenuCategory;

use super::LoadState;
use crate::services::{CatalogFetcher, CatalogMode, FetchError, FilterState, compute_visible};
use crate::supabase::MenuItem;

/// Identifies one load request; only the newest ticket may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Catalog, filter and the bookkeeping that keeps late responses out.
///
/// The filter is purely local: changing it never triggers a fetch, and
/// fetching never resets it.
#[derive(Debug, Default, Clone)]
pub struct MenuBrowser {
    catalog: LoadState<Vec<MenuItem>>,
    filter: FilterState,
    generation: u64,
}

impl MenuBrowser {
    #[must_use]
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Mark a load as in flight. Any earlier ticket is now stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.catalog = LoadState::Loading;
        LoadTicket(self.generation)
    }

    /// Settle the load identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched if a newer load was
    /// started in the meantime.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<MenuItem>, FetchError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Dropping stale menu load"
            );
            return false;
        }
        self.catalog = LoadState::settle(result);
        true
    }

    /// Fetch and settle in one step.
    pub async fn load(&mut self, fetcher: &CatalogFetcher, mode: CatalogMode) {
        let ticket = self.begin_load();
        let result = fetcher.fetch(mode).await;
        self.finish_load(ticket, result);
    }

    pub fn set_category(&mut self, category: MenuCategory) {
        self.filter.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The full catalog as last loaded, ignoring the filter.
    #[must_use]
    pub const fn catalog(&self) -> &LoadState<Vec<MenuItem>> {
        &self.catalog
    }

    /// Items to render: the filtered catalog once loaded, otherwise the
    /// current load state unchanged.
    #[must_use]
    pub fn visible(&self) -> LoadState<Vec<MenuItem>> {
        self.catalog
            .clone()
            .map(|items| compute_visible(&items, &self.filter))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::LOAD_FAILURE_MESSAGE;
    use crate::services::catalog::tests::{item, rows};
    use crate::supabase::{DataSourceError, MemoryDataSource, Table};

    fn catalog() -> Vec<MenuItem> {
        vec![
            item("Nasi Goreng", "Main", 25_000, None, true, 1),
            item("Es Teh", "Drink", 5_000, None, false, 2),
        ]
    }

    fn names(state: &LoadState<Vec<MenuItem>>) -> Vec<String> {
        state
            .loaded()
            .map(|items| items.iter().map(|i| i.name.clone()).collect())
            .unwrap_or_default()
    }

    fn fetch_failure() -> FetchError {
        FetchError::Query {
            table: Table::MenuItems,
            source: DataSourceError::Unavailable("down".into()),
        }
    }

    #[test]
    fn test_starts_idle_and_loading_hides_items() {
        let mut browser = MenuBrowser::default();
        assert_eq!(browser.visible(), LoadState::Idle);
        browser.begin_load();
        assert!(browser.visible().is_loading());
    }

    #[test]
    fn test_filter_applies_to_loaded_catalog() {
        let mut browser = MenuBrowser::default();
        let ticket = browser.begin_load();
        assert!(browser.finish_load(ticket, Ok(catalog())));

        browser.set_category(MenuCategory::Drink);
        assert_eq!(names(&browser.visible()), vec!["Es Teh"]);

        browser.set_category(MenuCategory::All);
        browser.set_query("nasi");
        assert_eq!(names(&browser.visible()), vec!["Nasi Goreng"]);

        // The underlying catalog is untouched by filtering.
        assert_eq!(names(browser.catalog()).len(), 2);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut browser = MenuBrowser::default();
        let first = browser.begin_load();
        let second = browser.begin_load();

        assert!(browser.finish_load(second, Ok(catalog())));
        assert!(!browser.finish_load(first, Err(fetch_failure())));
        assert_eq!(names(browser.catalog()), vec!["Nasi Goreng", "Es Teh"]);
    }

    #[test]
    fn test_failure_is_distinct_from_empty() {
        let mut failed = MenuBrowser::default();
        let ticket = failed.begin_load();
        failed.finish_load(ticket, Err(fetch_failure()));
        assert_eq!(
            failed.visible(),
            LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        );

        let mut empty = MenuBrowser::default();
        let ticket = empty.begin_load();
        empty.finish_load(ticket, Ok(Vec::new()));
        assert_eq!(empty.visible(), LoadState::Loaded(Vec::new()));
    }

    #[tokio::test]
    async fn test_load_keeps_filter_and_refetches() {
        let source = MemoryDataSource::new();
        source.seed(Table::MenuItems, rows(&catalog()));
        let fetcher = CatalogFetcher::new(Arc::new(source.clone()));

        let mut browser = MenuBrowser::new(FilterState::new(MenuCategory::Main, ""));
        browser.load(&fetcher, CatalogMode::All).await;
        assert_eq!(names(&browser.visible()), vec!["Nasi Goreng"]);

        browser.load(&fetcher, CatalogMode::All).await;
        assert_eq!(source.select_count(), 2);
        assert_eq!(browser.filter().category, MenuCategory::Main);
    }
}

//! Menu page: full catalog with category and text filters.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use meteen_core::{MenuCategory, MenuItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::ListResponse;
use crate::error::{AppError, Result};
use crate::models::MenuBrowser;
use crate::services::{CatalogMode, FilterState};
use crate::state::AppState;
use crate::supabase::MenuItem;

/// A menu item as the API presents it.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemView {
    pub id: MenuItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// e.g. `Rp 25.000`
    pub price_display: String,
    /// `image_url`, or a stock photo when absent.
    pub image: String,
    pub category: String,
    pub is_featured: bool,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            price_display: item.price_display(),
            image: item.image_or_placeholder().to_string(),
            category: item.category.clone(),
            is_featured: item.is_featured,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl MenuParams {
    /// Unknown category names are a client error; an empty one means all.
    fn into_filter(self) -> Result<FilterState> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => MenuCategory::All,
            Some(raw) => raw
                .parse()
                .map_err(|e: meteen_core::UnknownCategory| AppError::BadRequest(e.to_string()))?,
        };
        Ok(FilterState::new(category, self.q.unwrap_or_default()))
    }
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    #[serde(flatten)]
    pub list: ListResponse<MenuItemView>,
    pub filter: FilterState,
    pub categories: [MenuCategory; 6],
}

/// The catalog, fetched fresh, narrowed by the query's filter.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<MenuParams>,
) -> Result<(StatusCode, Json<MenuResponse>)> {
    let mut browser = MenuBrowser::new(params.into_filter()?);
    browser.load(state.catalog(), CatalogMode::All).await;

    let visible = browser
        .visible()
        .map(|items| items.iter().map(MenuItemView::from).collect::<Vec<_>>());
    let (status, list) = ListResponse::from_state(visible);

    Ok((
        status,
        Json(MenuResponse {
            list,
            filter: browser.filter().clone(),
            categories: MenuCategory::ALL,
        }),
    ))
}

/// The fixed category choices, `All` first.
pub async fn categories() -> Json<[MenuCategory; 6]> {
    Json(MenuCategory::ALL)
}

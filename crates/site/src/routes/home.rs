//! Home page data: the featured menu preview.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use super::ListResponse;
use super::menu::MenuItemView;
use crate::content::{Highlight, SITE_INFO};
use crate::models::LoadState;
use crate::services::CatalogMode;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured: ListResponse<MenuItemView>,
    pub highlights: &'static [Highlight],
}

/// Up to four featured items, newest first.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> (StatusCode, Json<HomeResponse>) {
    let result = state.catalog().fetch(CatalogMode::featured_preview()).await;
    let featured = LoadState::settle(result).map(|items| {
        items.iter().map(MenuItemView::from).collect::<Vec<_>>()
    });
    let (status, featured) = ListResponse::from_state(featured);

    (
        status,
        Json(HomeResponse {
            featured,
            highlights: SITE_INFO.highlights,
        }),
    )
}

//! HTTP route handlers for the site API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/site               - Restaurant info (address, hours, highlights)
//! GET  /api/home               - Featured menu preview
//! GET  /api/menu               - Menu with ?category= and ?q= filters
//! GET  /api/menu/categories    - Category choices
//! GET  /api/team               - Team roster
//! GET  /api/team/{id}          - Team member detail
//! POST /api/contact            - Contact form submission
//! ```
//!
//! List endpoints report backend failures in the body (`state: "failed"`)
//! with a 502 rather than an error object, so clients render one shape.

pub mod contact;
pub mod home;
pub mod menu;
pub mod site;
pub mod team;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::models::LoadState;
use crate::state::AppState;

/// A list as returned by the API, with its load state flattened in.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    /// `loaded` or `failed`.
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Status code and body for a settled load.
    ///
    /// `Idle` and `Loading` never reach a handler's response; they are
    /// reported as failures should that change.
    pub fn from_state(state: LoadState<Vec<T>>) -> (StatusCode, Self) {
        match state {
            LoadState::Loaded(items) => (
                StatusCode::OK,
                Self {
                    state: "loaded",
                    message: None,
                    items,
                },
            ),
            LoadState::Failed(message) => (
                StatusCode::BAD_GATEWAY,
                Self {
                    state: "failed",
                    message: Some(message),
                    items: Vec::new(),
                },
            ),
            LoadState::Idle | LoadState::Loading => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self {
                    state: "failed",
                    message: None,
                    items: Vec::new(),
                },
            ),
        }
    }
}

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index))
        .route("/categories", get(menu::categories))
}

/// Create the team routes router.
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(team::index))
        .route("/{id}", get(team::show))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/site", get(site::show))
        .route("/api/home", get(home::home))
        .nest("/api/menu", menu_routes())
        .nest("/api/team", team_routes())
        .route("/api/contact", post(contact::submit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_failed_has_no_items() {
        let (status, body) = ListResponse::<u8>::from_state(LoadState::Failed("x".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.state, "failed");
        assert!(body.items.is_empty());
    }

    #[test]
    fn test_list_response_loaded_empty_is_ok() {
        let (status, body) = ListResponse::<u8>::from_state(LoadState::Loaded(Vec::new()));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.state, "loaded");
        assert_eq!(body.message, None);
    }
}

//! Static restaurant info.

use axum::Json;

use crate::content::{SITE_INFO, SiteInfo};

/// Address, contact details, opening hours and home page highlights.
pub async fn show() -> Json<SiteInfo> {
    Json(SITE_INFO)
}

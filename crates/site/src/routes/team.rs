//! Team roster and member detail.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use meteen_core::TeamMemberId;
use serde::Serialize;
use tracing::instrument;

use super::ListResponse;
use crate::error::Result;
use crate::models::LoadState;
use crate::state::AppState;
use crate::supabase::TeamMember;

/// A team member as the API presents it.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberView {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    /// `image_url`, or a stock portrait when absent.
    pub image: String,
    pub instagram: Option<String>,
    pub instagram_url: Option<String>,
    pub display_order: i32,
}

impl From<&TeamMember> for TeamMemberView {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
            image: member.image_or_placeholder().to_string(),
            instagram: member.instagram.clone(),
            instagram_url: member.instagram_url(),
            display_order: member.display_order,
        }
    }
}

#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
) -> (StatusCode, Json<ListResponse<TeamMemberView>>) {
    let members = LoadState::settle(state.team().list().await)
        .map(|members| members.iter().map(TeamMemberView::from).collect::<Vec<_>>());
    let (status, body) = ListResponse::from_state(members);
    (status, Json(body))
}

/// Unknown and malformed ids are both 404.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamMemberView>> {
    let member = state.team().member_by_key(&id).await?;
    Ok(Json(TeamMemberView::from(&member)))
}

//! Team roster and member detail lookup.

use std::sync::Arc;

use meteen_core::TeamMemberId;
use thiserror::Error;
use tracing::{info, instrument};

use super::{FetchError, fetch_rows};
use crate::supabase::{DataSource, Direction, Query, Table, TeamMember};

/// Errors from a single-member lookup.
#[derive(Debug, Error)]
pub enum TeamError {
    /// No member has the requested id.
    #[error("team member not found: {0}")]
    NotFound(String),

    /// The backend read failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Reads `team_members`.
#[derive(Clone)]
pub struct TeamDirectory {
    source: Arc<dyn DataSource>,
}

impl TeamDirectory {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Every member, ordered by `display_order`; ties keep backend row order.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the backend query fails or a row is malformed.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<TeamMember>, FetchError> {
        let query = Query::from(Table::TeamMembers).order("display_order", Direction::Ascending);
        let members: Vec<TeamMember> = fetch_rows(self.source.as_ref(), &query).await?;
        info!(count = members.len(), "Team fetched");
        Ok(members)
    }

    /// Look up one member.
    ///
    /// # Errors
    ///
    /// Returns `TeamError::NotFound` if no row has this id, or
    /// `TeamError::Fetch` if the backend read fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn member(&self, id: TeamMemberId) -> Result<TeamMember, TeamError> {
        let query = Query::from(Table::TeamMembers)
            .eq("id", id.to_string())
            .limit(1);
        let members: Vec<TeamMember> = fetch_rows(self.source.as_ref(), &query).await?;
        members
            .into_iter()
            .next()
            .ok_or_else(|| TeamError::NotFound(id.to_string()))
    }

    /// Look up a member by the raw path segment.
    ///
    /// A segment that isn't a UUID can't name any member, so it is reported
    /// as not found without querying the backend.
    ///
    /// # Errors
    ///
    /// Same as [`Self::member`].
    pub async fn member_by_key(&self, raw: &str) -> Result<TeamMember, TeamError> {
        let id: TeamMemberId = raw
            .parse()
            .map_err(|_| TeamError::NotFound(raw.to_owned()))?;
        self.member(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::supabase::MemoryDataSource;

    fn member(name: &str, role: &str, display_order: i32) -> TeamMember {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
        TeamMember {
            id: TeamMemberId::random(),
            name: name.to_string(),
            role: role.to_string(),
            bio: None,
            image_url: None,
            instagram: None,
            display_order,
            created_at: at,
            updated_at: at,
        }
    }

    fn roster() -> Vec<TeamMember> {
        vec![
            member("Budi", "Barista", 3),
            member("Sari", "Head Chef", 1),
            member("Dewi", "Manager", 2),
            member("Rudi", "Cook", 3),
        ]
    }

    fn directory(members: &[TeamMember]) -> (TeamDirectory, MemoryDataSource) {
        let source = MemoryDataSource::new();
        source.seed(
            Table::TeamMembers,
            members.iter().map(|m| serde_json::to_value(m).unwrap()),
        );
        (TeamDirectory::new(Arc::new(source.clone())), source)
    }

    #[tokio::test]
    async fn test_list_orders_by_display_order_with_stable_ties() {
        let (dir, _) = directory(&roster());
        let names: Vec<_> = dir
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Sari", "Dewi", "Budi", "Rudi"]);
    }

    #[tokio::test]
    async fn test_member_found() {
        let roster = roster();
        let (dir, _) = directory(&roster);
        let wanted = roster.get(2).unwrap();
        let found = dir.member(wanted.id).await.unwrap();
        assert_eq!(&found, wanted);
    }

    #[tokio::test]
    async fn test_unknown_member_is_not_found() {
        let (dir, _) = directory(&roster());
        let err = dir.member(TeamMemberId::random()).await.unwrap_err();
        assert!(matches!(err, TeamError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_distinct_from_not_found() {
        let (dir, source) = directory(&roster());
        source.set_fail_reads(true);
        let err = dir.member(TeamMemberId::random()).await.unwrap_err();
        assert!(matches!(err, TeamError::Fetch(FetchError::Query { .. })));
        assert!(dir.list().await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_key_is_not_found_without_query() {
        let (dir, source) = directory(&roster());
        let err = dir.member_by_key("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, TeamError::NotFound(ref key) if key == "not-a-uuid"));
        assert_eq!(source.select_count(), 0);
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::team::{Team, TeamAgeSummary};

/// Repository trait for Team entities
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;

    /// Find all teams ordered by name
    async fn find_all(&self) -> RepositoryResult<Vec<Team>>;

    /// Member count and average age per team, ordered by team name
    async fn age_summaries(&self) -> RepositoryResult<Vec<TeamAgeSummary>>;
}

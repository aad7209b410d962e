use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::member::Member;
use crate::domain::search::{MemberTeamRow, Page, Pageable, SearchCondition};

/// Repository trait for Member entities
///
/// Covers plain CRUD plus the member/team search. Implementations own the
/// transaction boundary for `search_page` so the page and its total are
/// read from one snapshot.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    async fn save(&self, member: &Member) -> RepositoryResult<()>;

    /// Find a member by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>>;

    /// Find all members
    async fn find_all(&self) -> RepositoryResult<Vec<Member>>;

    /// Find members by exact username
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>>;

    /// Search members joined with their team
    async fn search(&self, condition: &SearchCondition) -> RepositoryResult<Vec<MemberTeamRow>>;

    /// Search one page of members joined with their team, with the total count
    async fn search_page(
        &self,
        condition: &SearchCondition,
        pageable: &Pageable,
    ) -> RepositoryResult<Page<MemberTeamRow>>;
}

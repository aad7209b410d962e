use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::member::Member;
use crate::domain::repositories::MemberRepository;
use crate::domain::search::{MemberTeamRow, Page, Pageable, SearchCondition};
use crate::infrastructure::search_executor::SearchExecutor;

#[derive(sqlx::FromRow)]
struct MemberRecord {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl From<MemberRecord> for Member {
    fn from(r: MemberRecord) -> Self {
        Member::from_persistence(r.id, r.username, r.age, r.team_id)
    }
}

/// SQLite implementation of MemberRepository
///
/// Searches go through [`SearchExecutor`]. `search_page` runs both of its
/// queries inside one transaction.
pub struct SqliteMemberRepository {
    pool: SqlitePool,
    executor: SearchExecutor,
}

impl SqliteMemberRepository {
    /// Creates a new SqliteMemberRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for SQLite
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            executor: SearchExecutor::new(),
        }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    #[tracing::instrument(skip(self, member), fields(member_id = %member.id()))]
    async fn save(&self, member: &Member) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO member (id, username, age, team_id)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                username = excluded.username,
                age = excluded.age,
                team_id = excluded.team_id
            "#,
        )
        .bind(member.id())
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Member>> {
        let record = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM member
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Member::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Member>> {
        let records = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM member
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Member::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Vec<Member>> {
        let records = sqlx::query_as::<_, MemberRecord>(
            r#"
            SELECT id, username, age, team_id
            FROM member
            WHERE username = ?
            ORDER BY rowid
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Member::from).collect())
    }

    async fn search(&self, condition: &SearchCondition) -> RepositoryResult<Vec<MemberTeamRow>> {
        let mut conn = self.pool.acquire().await?;
        self.executor.search(&mut *conn, condition).await
    }

    async fn search_page(
        &self,
        condition: &SearchCondition,
        pageable: &Pageable,
    ) -> RepositoryResult<Page<MemberTeamRow>> {
        // Reject before a transaction is opened.
        pageable.validate()?;

        let mut tx = self.pool.begin().await?;
        let page = self
            .executor
            .search_page(&mut *tx, condition, pageable)
            .await?;
        tx.commit().await?;

        Ok(page)
    }
}

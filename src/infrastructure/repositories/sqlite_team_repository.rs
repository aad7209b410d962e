use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamAgeSummary};

#[derive(sqlx::FromRow)]
struct TeamRecord {
    id: Uuid,
    name: String,
}

/// SQLite implementation of TeamRepository
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Creates a new SqliteTeamRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    #[tracing::instrument(skip(self, team), fields(team_id = %team.id()))]
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO team (id, name)
            VALUES (?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let record = sqlx::query_as::<_, TeamRecord>(
            r#"
            SELECT id, name
            FROM team
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(|r| Team::from_persistence(r.id, r.name)))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let records = sqlx::query_as::<_, TeamRecord>(
            r#"
            SELECT id, name
            FROM team
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records
            .into_iter()
            .map(|r| Team::from_persistence(r.id, r.name))
            .collect())
    }

    async fn age_summaries(&self) -> RepositoryResult<Vec<TeamAgeSummary>> {
        let summaries = sqlx::query_as::<_, TeamAgeSummary>(
            r#"
            SELECT
                t.name AS team_name,
                COUNT(m.id) AS member_count,
                AVG(m.age) AS average_age
            FROM member m
            INNER JOIN team t ON m.team_id = t.id
            GROUP BY t.name
            ORDER BY t.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }
}

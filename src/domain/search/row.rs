use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat projection of a member joined with its team
///
/// Columns are mapped by alias: `member_id`, `username`, `age`, `team_id`,
/// `team_name`. A member without a team has both team fields set to `None`,
/// which is distinct from a team whose name is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemberTeamRow {
    pub member_id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

impl MemberTeamRow {
    /// True when the left join found a team for this member
    pub fn has_team(&self) -> bool {
        self.team_id.is_some()
    }
}

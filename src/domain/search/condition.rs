use serde::{Deserialize, Serialize};

/// Sparse filter for the member/team search
///
/// Every field is optional. Text fields holding only whitespace are treated
/// the same as missing ones. An empty condition selects every member.
///
/// `age_goe > age_loe` is accepted and simply matches nothing.
///
/// # Example
/// ```
/// use member_search::domain::search::SearchCondition;
///
/// let condition = SearchCondition::new()
///     .username("member1")
///     .team_name("teamA")
///     .age_loe(20);
///
/// assert_eq!(condition.username.as_deref(), Some("member1"));
/// assert!(condition.age_goe.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl SearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Lower age bound, inclusive
    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Upper age bound, inclusive
    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}

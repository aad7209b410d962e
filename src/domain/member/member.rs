use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::team::Team;

/// Member entity
///
/// A person who belongs to at most one team.
///
/// # Invariants
/// - Age is never negative
/// - The ID is assigned once at construction and never changes
///
/// # Example
/// ```
/// use member_search::domain::member::Member;
/// use member_search::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// let member = Member::new(Some("member1".to_string()), 10, Some(&team)).expect("valid member");
///
/// assert_eq!(member.username(), Some("member1"));
/// assert_eq!(member.team_id(), Some(team.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl Member {
    /// Creates a new Member
    ///
    /// # Arguments
    /// * `username` - Optional display name
    /// * `age` - Age in years (cannot be negative)
    /// * `team` - Team the member joins, if any
    ///
    /// # Returns
    /// * `Ok(Member)` - New member with a fresh ID
    /// * `Err(String)` - If the age is negative
    pub fn new(username: Option<String>, age: i32, team: Option<&Team>) -> Result<Self, String> {
        if age < 0 {
            return Err(format!("Age cannot be negative: {}", age));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            age,
            team_id: team.map(Team::id),
        })
    }

    /// Moves the member into another team
    pub fn change_team(&mut self, team: &Team) {
        self.team_id = Some(team.id());
    }

    /// Detaches the member from its team
    pub fn leave_team(&mut self) {
        self.team_id = None;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Reconstructs a Member from a stored row
    ///
    /// Skips validation; the schema already enforces the age check.
    pub fn from_persistence(
        id: Uuid,
        username: Option<String>,
        age: i32,
        team_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_member_without_team() {
        let member = Member::new(Some("member1".to_string()), 10, None).unwrap();

        assert_eq!(member.username(), Some("member1"));
        assert_eq!(member.age(), 10);
        assert!(member.team_id().is_none());
    }

    #[test]
    fn create_member_with_team() {
        let team = Team::new("teamA").unwrap();
        let member = Member::new(Some("member1".to_string()), 10, Some(&team)).unwrap();

        assert_eq!(member.team_id(), Some(team.id()));
    }

    #[test]
    fn create_member_with_negative_age_fails() {
        let result = Member::new(Some("member1".to_string()), -1, None);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be negative"));
    }

    #[test]
    fn zero_age_is_allowed() {
        assert!(Member::new(None, 0, None).is_ok());
    }

    #[test]
    fn change_team_keeps_identity() {
        let team_a = Team::new("teamA").unwrap();
        let team_b = Team::new("teamB").unwrap();
        let mut member = Member::new(Some("member1".to_string()), 10, Some(&team_a)).unwrap();
        let id = member.id();

        member.change_team(&team_b);

        assert_eq!(member.id(), id);
        assert_eq!(member.team_id(), Some(team_b.id()));

        member.leave_team();
        assert!(member.team_id().is_none());
    }

    #[test]
    fn each_member_gets_a_distinct_id() {
        let m1 = Member::new(None, 1, None).unwrap();
        let m2 = Member::new(None, 1, None).unwrap();

        assert_ne!(m1.id(), m2.id());
    }
}

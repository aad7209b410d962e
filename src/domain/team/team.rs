use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team entity
///
/// Groups members together. Members reference their team; a team does
/// not own a member list in memory.
///
/// # Invariants
/// - Name cannot be blank
/// - The ID is assigned once at construction and never changes
///
/// # Example
/// ```
/// use member_search::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// assert_eq!(team.name(), "teamA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: Uuid,
    name: String,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh ID
    /// * `Err(String)` - If the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Renames the team
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        self.name = name;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from a stored row
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let team = Team::new("teamA").unwrap();

        assert_eq!(team.name(), "teamA");
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new("");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn create_team_with_blank_name_fails() {
        assert!(Team::new("   ").is_err());
    }

    #[test]
    fn rename_team() {
        let mut team = Team::new("teamA").unwrap();
        let id = team.id();

        team.rename("teamZ").unwrap();

        assert_eq!(team.name(), "teamZ");
        assert_eq!(team.id(), id);
        assert!(team.rename(" ").is_err());
        assert_eq!(team.name(), "teamZ");
    }

    #[test]
    fn from_persistence_keeps_fields() {
        let id = Uuid::new_v4();
        let team = Team::from_persistence(id, "teamB".to_string());

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "teamB");
    }
}

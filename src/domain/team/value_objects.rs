use serde::{Deserialize, Serialize};

/// Per-team age statistics
///
/// Produced by grouping members on their team name. Teams without members
/// do not appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamAgeSummary {
    pub team_name: String,
    pub member_count: i64,
    pub average_age: f64,
}

impl TeamAgeSummary {
    /// Average age rounded down to whole years
    ///
    /// # Example
    /// ```
    /// use member_search::domain::team::TeamAgeSummary;
    ///
    /// let summary = TeamAgeSummary {
    ///     team_name: "teamA".to_string(),
    ///     member_count: 2,
    ///     average_age: 15.5,
    /// };
    /// assert_eq!(summary.average_age_years(), 15);
    /// ```
    pub fn average_age_years(&self) -> i32 {
        self.average_age.floor() as i32
    }
}

impl std::fmt::Display for TeamAgeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} members, average age {:.1}",
            self.team_name, self.member_count, self.average_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(average_age: f64) -> TeamAgeSummary {
        TeamAgeSummary {
            team_name: "teamA".to_string(),
            member_count: 2,
            average_age,
        }
    }

    #[test]
    fn average_age_years_rounds_down() {
        assert_eq!(summary(15.0).average_age_years(), 15);
        assert_eq!(summary(15.9).average_age_years(), 15);
    }

    #[test]
    fn summary_display() {
        assert_eq!(summary(15.0).to_string(), "teamA: 2 members, average age 15.0");
    }
}

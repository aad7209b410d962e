use super::condition::SearchCondition;
use super::row::MemberTeamRow;

/// One comparison in a search predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `member.username = value`
    UsernameEq(String),
    /// `team.name = value`
    TeamNameEq(String),
    /// `member.age >= value`
    AgeGoe(i32),
    /// `member.age <= value`
    AgeLoe(i32),
}

impl Fragment {
    /// Evaluates the comparison against a projected row
    ///
    /// A missing username or team never equals a value, matching SQL NULL
    /// comparison semantics.
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        match self {
            Fragment::UsernameEq(username) => row.username.as_deref() == Some(username.as_str()),
            Fragment::TeamNameEq(name) => row.team_name.as_deref() == Some(name.as_str()),
            Fragment::AgeGoe(age) => row.age >= *age,
            Fragment::AgeLoe(age) => row.age <= *age,
        }
    }
}

/// Conjunction of fragments
///
/// An empty predicate is the identity and matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    fragments: Vec<Fragment>,
}

impl Predicate {
    /// Predicate that matches everything
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        self.fragments.iter().all(|fragment| fragment.matches(row))
    }
}

impl FromIterator<Option<Fragment>> for Predicate {
    fn from_iter<I: IntoIterator<Item = Option<Fragment>>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().flatten().collect(),
        }
    }
}

/// Maps a [`SearchCondition`] onto a [`Predicate`]
///
/// Each field yields at most one fragment; missing fields and whitespace-only
/// text are skipped. Fragments always come out in field order, so two
/// conditions with the same populated fields compose to equal predicates.
///
/// # Example
/// ```
/// use member_search::domain::search::{Fragment, PredicateComposer, SearchCondition};
///
/// let predicate = PredicateComposer::build(
///     &SearchCondition::new().team_name("  ").age_goe(20),
/// );
///
/// assert_eq!(predicate.fragments(), &[Fragment::AgeGoe(20)]);
/// ```
pub struct PredicateComposer;

impl PredicateComposer {
    pub fn build(condition: &SearchCondition) -> Predicate {
        [
            Self::username_eq(condition.username.as_deref()),
            Self::team_name_eq(condition.team_name.as_deref()),
            Self::age_goe(condition.age_goe),
            Self::age_loe(condition.age_loe),
        ]
        .into_iter()
        .collect()
    }

    fn username_eq(username: Option<&str>) -> Option<Fragment> {
        has_text(username).map(|u| Fragment::UsernameEq(u.to_string()))
    }

    fn team_name_eq(team_name: Option<&str>) -> Option<Fragment> {
        has_text(team_name).map(|t| Fragment::TeamNameEq(t.to_string()))
    }

    fn age_goe(age: Option<i32>) -> Option<Fragment> {
        age.map(Fragment::AgeGoe)
    }

    fn age_loe(age: Option<i32>) -> Option<Fragment> {
        age.map(Fragment::AgeLoe)
    }
}

// Returns the value untouched; only the presence check ignores whitespace.
fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn row(username: Option<&str>, age: i32, team_name: Option<&str>) -> MemberTeamRow {
        MemberTeamRow {
            member_id: Uuid::new_v4(),
            username: username.map(str::to_string),
            age,
            team_id: team_name.map(|_| Uuid::new_v4()),
            team_name: team_name.map(str::to_string),
        }
    }

    #[test]
    fn empty_condition_builds_identity() {
        let predicate = PredicateComposer::build(&SearchCondition::new());

        assert!(predicate.is_identity());
        assert_eq!(predicate, Predicate::identity());
        assert!(predicate.matches(&row(None, 0, None)));
    }

    #[test]
    fn all_fields_build_four_fragments_in_order() {
        let predicate = PredicateComposer::build(
            &SearchCondition::new()
                .age_loe(20)
                .age_goe(10)
                .team_name("teamA")
                .username("member1"),
        );

        assert_eq!(
            predicate.fragments(),
            &[
                Fragment::UsernameEq("member1".to_string()),
                Fragment::TeamNameEq("teamA".to_string()),
                Fragment::AgeGoe(10),
                Fragment::AgeLoe(20),
            ]
        );
    }

    #[test]
    fn whitespace_text_is_skipped() {
        let blank = PredicateComposer::build(&SearchCondition::new().username(" \t").team_name(""));

        assert!(blank.is_identity());
    }

    #[test]
    fn text_value_is_not_trimmed() {
        let predicate = PredicateComposer::build(&SearchCondition::new().username(" member1 "));

        assert_eq!(
            predicate.fragments(),
            &[Fragment::UsernameEq(" member1 ".to_string())]
        );
        assert!(!predicate.matches(&row(Some("member1"), 10, None)));
    }

    #[test]
    fn same_present_fields_build_equal_predicates() {
        let c1 = SearchCondition::new().age_goe(20).team_name("   ");
        let c2 = SearchCondition::new().age_goe(20);

        assert_eq!(PredicateComposer::build(&c1), PredicateComposer::build(&c2));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let predicate = PredicateComposer::build(&SearchCondition::new().age_goe(20).age_loe(30));

        assert!(!predicate.matches(&row(Some("a"), 19, None)));
        assert!(predicate.matches(&row(Some("a"), 20, None)));
        assert!(predicate.matches(&row(Some("a"), 30, None)));
        assert!(!predicate.matches(&row(Some("a"), 31, None)));
    }

    #[test]
    fn inverted_age_bounds_match_nothing() {
        let predicate = PredicateComposer::build(&SearchCondition::new().age_goe(30).age_loe(20));

        assert!((0..100).all(|age| !predicate.matches(&row(None, age, None))));
    }

    #[test]
    fn missing_team_never_matches_team_name() {
        let predicate = PredicateComposer::build(&SearchCondition::new().team_name("teamA"));

        assert!(!predicate.matches(&row(Some("member1"), 10, None)));
        assert!(predicate.matches(&row(Some("member1"), 10, Some("teamA"))));
    }

    #[test]
    fn missing_username_never_matches_username() {
        let predicate = PredicateComposer::build(&SearchCondition::new().username("member1"));

        assert!(!predicate.matches(&row(None, 10, Some("teamA"))));
    }
}

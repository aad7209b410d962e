use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::search::{
    Direction, Fragment, MemberTeamRow, Page, Pageable, Predicate, PredicateComposer,
    SearchCondition, Sort, SortProperty,
};

const SELECT_ROWS: &str = "SELECT m.id AS member_id, m.username AS username, m.age AS age, \
     t.id AS team_id, t.name AS team_name \
     FROM member m LEFT OUTER JOIN team t ON m.team_id = t.id";

const SELECT_COUNT: &str =
    "SELECT COUNT(*) FROM member m LEFT OUTER JOIN team t ON m.team_id = t.id";

/// Runs the member/team search against a SQLite connection
///
/// Holds no state, so one executor can be shared by any number of tasks.
/// The caller supplies the connection; pass an open transaction to
/// [`SearchExecutor::search_page`] when the page and its total must come
/// from the same snapshot. The executor never begins or commits one itself.
///
/// Rows are ordered by member id unless the pageable carries a sort, in
/// which case member id is appended as the final tie-breaker.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchExecutor;

impl SearchExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Returns every row of the member/team left join matching the condition
    #[tracing::instrument(skip(self, conn))]
    pub async fn search(
        &self,
        conn: &mut SqliteConnection,
        condition: &SearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamRow>> {
        let predicate = PredicateComposer::build(condition);
        let mut query = rows_query(&predicate, &Sort::unsorted());

        let rows = query
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&mut *conn)
            .await?;

        tracing::debug!(rows = rows.len(), "search finished");
        Ok(rows)
    }

    /// Returns one page of matching rows plus the total match count
    ///
    /// # Errors
    /// * `InvalidInput` - negative offset or page size below 1; no query runs
    /// * `Storage` - either query failed
    /// * `InconsistentSnapshot` - the page length disagrees with the count
    #[tracing::instrument(skip(self, conn))]
    pub async fn search_page(
        &self,
        conn: &mut SqliteConnection,
        condition: &SearchCondition,
        pageable: &Pageable,
    ) -> RepositoryResult<Page<MemberTeamRow>> {
        pageable.validate()?;

        let predicate = PredicateComposer::build(condition);

        let mut query = rows_query(&predicate, &pageable.sort);
        query
            .push(" LIMIT ")
            .push_bind(pageable.page_size)
            .push(" OFFSET ")
            .push_bind(pageable.offset);

        let items = query
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&mut *conn)
            .await?;

        let total_count: i64 = count_query(&predicate)
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await?;

        check_snapshot(pageable, items.len(), total_count)?;

        tracing::debug!(page_len = items.len(), total_count, "search page finished");
        Ok(Page::new(items, pageable, total_count))
    }
}

// Only fires when a writer outside the caller's snapshot changed the rows
// between the page query and the count query.
fn check_snapshot(pageable: &Pageable, page_len: usize, total_count: i64) -> RepositoryResult<()> {
    if page_len == pageable.expected_len(total_count) {
        return Ok(());
    }

    tracing::warn!(page_len, total_count, "page and count disagree");
    Err(RepositoryError::InconsistentSnapshot {
        offset: pageable.offset,
        page_len,
        total_count,
    })
}

fn rows_query(predicate: &Predicate, sort: &Sort) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(SELECT_ROWS);
    push_where(&mut query, predicate);
    push_order_by(&mut query, sort);
    query
}

fn count_query(predicate: &Predicate) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(SELECT_COUNT);
    push_where(&mut query, predicate);
    query
}

fn push_where(query: &mut QueryBuilder<'static, Sqlite>, predicate: &Predicate) {
    if predicate.is_identity() {
        return;
    }

    query.push(" WHERE ");
    let mut conjunction = query.separated(" AND ");
    for fragment in predicate.fragments() {
        match fragment {
            Fragment::UsernameEq(username) => {
                conjunction.push("m.username = ");
                conjunction.push_bind_unseparated(username.clone());
            }
            Fragment::TeamNameEq(name) => {
                conjunction.push("t.name = ");
                conjunction.push_bind_unseparated(name.clone());
            }
            Fragment::AgeGoe(age) => {
                conjunction.push("m.age >= ");
                conjunction.push_bind_unseparated(*age);
            }
            Fragment::AgeLoe(age) => {
                conjunction.push("m.age <= ");
                conjunction.push_bind_unseparated(*age);
            }
        }
    }
}

// Column names come from the enum only; caller text never reaches the SQL.
fn push_order_by(query: &mut QueryBuilder<'static, Sqlite>, sort: &Sort) {
    query.push(" ORDER BY ");
    for order in sort.orders() {
        let column = column(order.property);
        if order.nulls_last {
            query.push(column).push(" IS NULL, ");
        }
        query.push(column).push(match order.direction {
            Direction::Asc => " ASC, ",
            Direction::Desc => " DESC, ",
        });
    }
    query.push("m.id ASC");
}

fn column(property: SortProperty) -> &'static str {
    match property {
        SortProperty::MemberId => "m.id",
        SortProperty::Username => "m.username",
        SortProperty::Age => "m.age",
        SortProperty::TeamName => "t.name",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::Order;

    #[test]
    fn matching_page_and_count_pass_snapshot_check() {
        assert!(check_snapshot(&Pageable::new(1, 2), 2, 4).is_ok());
        assert!(check_snapshot(&Pageable::new(3, 2), 1, 4).is_ok());
        assert!(check_snapshot(&Pageable::new(10, 2), 0, 4).is_ok());
        assert!(check_snapshot(&Pageable::new(0, 10), 0, 0).is_ok());
    }

    #[test]
    fn page_longer_than_count_allows_is_inconsistent() {
        let result = check_snapshot(&Pageable::new(2, 2), 2, 3);

        assert!(matches!(
            result,
            Err(RepositoryError::InconsistentSnapshot {
                offset: 2,
                page_len: 2,
                total_count: 3,
            })
        ));
    }

    #[test]
    fn short_page_with_rows_remaining_is_inconsistent() {
        let result = check_snapshot(&Pageable::new(0, 2), 1, 4);

        assert!(matches!(
            result,
            Err(RepositoryError::InconsistentSnapshot { page_len: 1, .. })
        ));
    }

    #[test]
    fn identity_predicate_has_no_where_clause() {
        let query = rows_query(&Predicate::identity(), &Sort::unsorted());

        assert!(query.sql().contains("LEFT OUTER JOIN team t ON m.team_id = t.id"));
        assert!(!query.sql().contains("WHERE"));
        assert!(query.sql().ends_with(" ORDER BY m.id ASC"));
    }

    #[test]
    fn fragments_are_joined_with_and() {
        let predicate = PredicateComposer::build(
            &SearchCondition::new()
                .username("member1")
                .team_name("teamA")
                .age_goe(10)
                .age_loe(20),
        );
        let query = count_query(&predicate);

        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM member m LEFT OUTER JOIN team t ON m.team_id = t.id \
             WHERE m.username = ? AND t.name = ? AND m.age >= ? AND m.age <= ?"
        );
    }

    #[test]
    fn single_fragment_has_no_dangling_and() {
        let predicate = PredicateComposer::build(&SearchCondition::new().age_loe(20));
        let query = count_query(&predicate);

        assert!(query.sql().ends_with(" WHERE m.age <= ?"));
    }

    #[test]
    fn sort_terms_precede_id_tie_breaker() {
        let sort = Sort::by(Order::desc(SortProperty::Age))
            .and(Order::asc(SortProperty::Username).nulls_last());
        let query = rows_query(&Predicate::identity(), &sort);

        assert!(query.sql().ends_with(
            " ORDER BY m.age DESC, m.username IS NULL, m.username ASC, m.id ASC"
        ));
    }

    #[test]
    fn team_name_sort_uses_joined_column() {
        let query = rows_query(
            &Predicate::identity(),
            &Sort::by(Order::asc(SortProperty::TeamName)),
        );

        assert!(query.sql().ends_with(" ORDER BY t.name ASC, m.id ASC"));
    }
}

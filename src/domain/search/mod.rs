// Search domain module
// Value types and predicate composition for the member/team search.
// Nothing here touches the database.

pub mod condition;
pub mod page;
pub mod predicate;
pub mod row;

pub use condition::SearchCondition;
pub use page::{Direction, Order, Page, Pageable, Sort, SortProperty};
pub use predicate::{Fragment, Predicate, PredicateComposer};
pub use row::MemberTeamRow;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{RepositoryError, RepositoryResult};

/// Column a search page can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortProperty {
    MemberId,
    Username,
    Age,
    TeamName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Single ordering term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub property: SortProperty,
    pub direction: Direction,
    /// Place rows with a missing value after all others
    #[serde(default)]
    pub nulls_last: bool,
}

impl Order {
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: Direction::Asc,
            nulls_last: false,
        }
    }

    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: Direction::Desc,
            nulls_last: false,
        }
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls_last = true;
        self
    }
}

/// Ordered list of ordering terms
///
/// An unsorted `Sort` falls back to member id ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(order: Order) -> Self {
        Self {
            orders: vec![order],
        }
    }

    pub fn and(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

/// Paging request
///
/// Fields are public so any value can be expressed; [`Pageable::validate`]
/// runs before a page query touches the database.
///
/// # Example
/// ```
/// use member_search::domain::search::Pageable;
///
/// let pageable = Pageable::of(2, 10).expect("offset fits");
/// assert_eq!(pageable.offset, 20);
/// assert!(pageable.validate().is_ok());
/// assert!(Pageable::new(-1, 10).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub offset: i64,
    pub page_size: i64,
    #[serde(default)]
    pub sort: Sort,
}

impl Pageable {
    pub fn new(offset: i64, page_size: i64) -> Self {
        Self {
            offset,
            page_size,
            sort: Sort::unsorted(),
        }
    }

    /// Zero-based page number
    ///
    /// Fails with `InvalidInput` when the page's offset does not fit in an `i64`.
    pub fn of(page_number: i64, page_size: i64) -> RepositoryResult<Self> {
        let offset = page_number.checked_mul(page_size).ok_or_else(|| {
            RepositoryError::InvalidInput(format!(
                "page {} of size {} is out of range",
                page_number, page_size
            ))
        })?;
        Ok(Self::new(offset, page_size))
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn validate(&self) -> RepositoryResult<()> {
        if self.offset < 0 {
            return Err(RepositoryError::InvalidInput(format!(
                "offset must not be negative: {}",
                self.offset
            )));
        }
        if self.page_size < 1 {
            return Err(RepositoryError::InvalidInput(format!(
                "page size must be at least 1: {}",
                self.page_size
            )));
        }
        Ok(())
    }

    /// Number of rows this page should hold for a given total
    pub fn expected_len(&self, total_count: i64) -> usize {
        let remaining = total_count.saturating_sub(self.offset).max(0);
        remaining.min(self.page_size).max(0) as usize
    }
}

/// One page of results together with the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: i64,
    pub page_size: i64,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pageable: &Pageable, total_count: i64) -> Self {
        Self {
            items,
            offset: pageable.offset,
            page_size: pageable.page_size,
            total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_number(&self) -> i64 {
        self.offset / self.page_size.max(1)
    }

    pub fn total_pages(&self) -> i64 {
        let size = self.page_size.max(1);
        self.total_count / size + i64::from(self.total_count % size != 0)
    }

    pub fn has_next(&self) -> bool {
        self.offset.saturating_add(self.page_size) < self.total_count
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Converts the items, keeping paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

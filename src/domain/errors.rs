use thiserror::Error;

/// Errors raised by repositories and the search executor
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(
        "Inconsistent snapshot: page at offset {offset} holds {page_len} rows but total count is {total_count}"
    )]
    InconsistentSnapshot {
        offset: i64,
        page_len: usize,
        total_count: i64,
    },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

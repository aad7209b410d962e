use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Settings;
use crate::domain::errors::RepositoryResult;

/// Opens a connection pool and brings the schema up to date
///
/// Foreign keys are enforced on every connection. In-memory databases get a
/// single connection that is never recycled, otherwise the data would vanish.
pub async fn connect(settings: &Settings) -> RepositoryResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if settings.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(settings.max_connections)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    migrate(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Applies the bundled migrations
pub async fn migrate(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

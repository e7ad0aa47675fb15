//! SQLite connection pool. The pool is the only handle to the database file and is shared through `AppState`.

use crate::config::DatabaseConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Connection options for `config`. The database file is created if it does not exist.
/// sqlx enables foreign keys by default; here they follow `enforce_foreign_keys`.
pub fn connect_options(config: &DatabaseConfig) -> Result<SqliteConnectOptions, AppError> {
    let invalid = || ConfigError::InvalidValue {
        key: "DATABASE_URL",
        value: config.url.clone(),
    };
    if !config.url.starts_with("sqlite:") {
        return Err(invalid().into());
    }
    let opts = SqliteConnectOptions::from_str(&config.url)
        .map_err(|_| invalid())?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout)
        .foreign_keys(config.enforce_foreign_keys);
    Ok(opts)
}

/// Open the pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let opts = connect_options(config)?;
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    tracing::info!(
        url = %config.url,
        max_connections = config.max_connections,
        enforce_foreign_keys = config.enforce_foreign_keys,
        "connected to database"
    );
    Ok(pool)
}

//! Table DDL for `users` and `purchases`. Every statement is idempotent (`IF NOT EXISTS`).

use crate::config::SchemaInitPolicy;
use crate::error::AppError;
use sqlx::SqlitePool;

const USERS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE
    )
"#;

const PURCHASES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS purchases (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        product TEXT NOT NULL,
        price REAL NOT NULL,
        purchase_date TEXT NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )
"#;

/// Create `users` then `purchases` if absent. Stops at the first failing statement.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for (table, ddl) in [("users", USERS_DDL), ("purchases", PURCHASES_DDL)] {
        tracing::debug!(sql = %ddl.trim(), "query");
        sqlx::query(ddl).execute(pool).await?;
        tracing::info!(table, "table ensured");
    }
    Ok(())
}

/// Run [`ensure_schema`] under `policy`. With `BestEffort` the error is logged and swallowed.
pub async fn initialize_schema(pool: &SqlitePool, policy: SchemaInitPolicy) -> Result<(), AppError> {
    match (ensure_schema(pool).await, policy) {
        (Ok(()), _) => Ok(()),
        (Err(e), SchemaInitPolicy::FailFast) => {
            tracing::error!(error = %e, "schema initialization failed");
            Err(e)
        }
        (Err(e), SchemaInitPolicy::BestEffort) => {
            tracing::error!(error = %e, "schema initialization failed; continuing in degraded mode");
            Ok(())
        }
    }
}

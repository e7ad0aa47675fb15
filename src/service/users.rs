//! User queries. Each operation runs exactly one statement.

use crate::error::AppError;
use crate::model::{NewUser, Purchase, User};
use sqlx::SqlitePool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let sql = "SELECT id, name, email FROM users ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert a user and return it with the assigned id. A duplicate email surfaces as the store's unique-constraint error.
    pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<User, AppError> {
        let sql = "INSERT INTO users (name, email) VALUES (?, ?) RETURNING id, name, email";
        tracing::debug!(sql = %sql, name = %user.name, email = %user.email, "query");
        let row = sqlx::query_as::<_, User>(sql)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Purchases whose `user_id` equals `user_id`. No existence check on the user: an unknown id yields an empty list.
    pub async fn purchases(pool: &SqlitePool, user_id: i64) -> Result<Vec<Purchase>, AppError> {
        let sql = "SELECT id, user_id, product, price, purchase_date FROM purchases WHERE user_id = ? ORDER BY id";
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, Purchase>(sql)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}

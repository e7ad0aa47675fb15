//! Purchase queries, including the inner join with users.

use crate::error::AppError;
use crate::model::{NewPurchase, Purchase, PurchaseWithUser};
use sqlx::SqlitePool;

const SELECT_JOINED: &str = r#"
    SELECT
        users.id AS user_id,
        users.name AS user_name,
        users.email AS user_email,
        purchases.id AS purchase_id,
        purchases.product AS purchase_product,
        purchases.price AS purchase_price,
        purchases.purchase_date AS purchase_date
    FROM users
    JOIN purchases ON users.id = purchases.user_id
    ORDER BY purchases.id
"#;

pub struct PurchaseService;

impl PurchaseService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Purchase>, AppError> {
        let sql = "SELECT id, user_id, product, price, purchase_date FROM purchases ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Purchase>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Purchases paired with their user. Purchases whose user does not exist are left out.
    pub async fn list_with_users(pool: &SqlitePool) -> Result<Vec<PurchaseWithUser>, AppError> {
        tracing::debug!(sql = %SELECT_JOINED.trim(), "query");
        let rows = sqlx::query_as::<_, PurchaseWithUser>(SELECT_JOINED)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Insert a purchase and return it with the assigned id.
    /// The referenced user is not looked up first; only an enforced foreign key can reject a dangling `user_id`.
    pub async fn create(pool: &SqlitePool, purchase: &NewPurchase) -> Result<Purchase, AppError> {
        let sql = "INSERT INTO purchases (user_id, product, price, purchase_date) VALUES (?, ?, ?, ?) \
                   RETURNING id, user_id, product, price, purchase_date";
        tracing::debug!(sql = %sql, user_id = purchase.user_id, "query");
        sqlx::query_as::<_, Purchase>(sql)
            .bind(purchase.user_id)
            .bind(&purchase.product)
            .bind(purchase.price)
            .bind(&purchase.purchase_date)
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    AppError::UnknownUser(purchase.user_id)
                }
                other => AppError::Db(other),
            })
    }
}

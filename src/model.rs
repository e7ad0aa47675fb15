//! Row and payload types for users and purchases.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    #[schema(example = "Ana Souza")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Purchase {
    pub id: i64,
    /// Nullable column; rows written through this API always carry a value.
    pub user_id: Option<i64>,
    pub product: String,
    pub price: f64,
    #[schema(example = "2024-01-01")]
    pub purchase_date: String,
}

/// One row of the purchases/users inner join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PurchaseWithUser {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub purchase_id: i64,
    pub purchase_product: String,
    pub purchase_price: f64,
    pub purchase_date: String,
}

/// Body of `POST /users`. Fields are optional so missing values reach validation instead of the JSON parser.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ana Souza")]
    pub name: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
}

/// Body of `POST /purchases`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePurchaseRequest {
    pub user_id: Option<i64>,
    #[schema(example = "Keyboard")]
    pub product: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    #[schema(example = "2024-01-01")]
    pub purchase_date: Option<String>,
}

/// Validated user ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validated purchase ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPurchase {
    pub user_id: i64,
    pub product: String,
    pub price: f64,
    pub purchase_date: String,
}

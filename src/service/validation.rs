//! Presence checks for create requests.
//!
//! A field counts as missing when it is absent or `null`; text fields must also be non-empty.
//! Numeric zero is a legitimate value (`price: 0`, `user_id: 0`).

use crate::error::AppError;
use crate::model::{CreatePurchaseRequest, CreateUserRequest, NewPurchase, NewUser};

pub const USER_FIELDS_REQUIRED: &str = "name and email are required";
pub const PURCHASE_FIELDS_REQUIRED: &str = "incomplete data to register the purchase";

pub struct RequestValidator;

impl RequestValidator {
    pub fn new_user(body: CreateUserRequest) -> Result<NewUser, AppError> {
        match (present(body.name), present(body.email)) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err(AppError::Validation(USER_FIELDS_REQUIRED)),
        }
    }

    pub fn new_purchase(body: CreatePurchaseRequest) -> Result<NewPurchase, AppError> {
        match (
            body.user_id,
            present(body.product),
            body.price,
            present(body.purchase_date),
        ) {
            (Some(user_id), Some(product), Some(price), Some(purchase_date)) => Ok(NewPurchase {
                user_id,
                product,
                price,
                purchase_date,
            }),
            _ => Err(AppError::Validation(PURCHASE_FIELDS_REQUIRED)),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

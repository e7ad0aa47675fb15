//! HTTP handlers for users and purchases.

pub mod purchases;
pub mod users;
pub use purchases::*;
pub use users::*;

use crate::error::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;

/// Unwrap a JSON body. Parser and content-type rejections become 400s carrying the parser's message;
/// an over-limit body stays a 413.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

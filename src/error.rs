//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation: {0}")]
    Validation(&'static str),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("user {0} does not exist")]
    UnknownUser(i64),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Message placed in the response body. Store errors carry the raw driver message.
    pub fn message(&self) -> String {
        match self {
            AppError::Config(e) => e.to_string(),
            AppError::Validation(msg) => (*msg).to_string(),
            AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::UnknownUser(_) => self.to_string(),
            AppError::Db(e) => store_message(e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnknownUser(_) => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn store_message(e: &sqlx::Error) -> String {
    match e {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

/// Error body returned by every failing endpoint.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "name and email are required")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Db(e) = &self {
            tracing::error!(error = %e, "store error");
        }
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_static_message() {
        let err = AppError::Validation("name and email are required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "name and email are required");
    }

    #[test]
    fn unknown_user_is_a_conflict() {
        let err = AppError::UnknownUser(42);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.message(), "user 42 does not exist");
    }

    #[test]
    fn store_errors_are_internal() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[tokio::test]
    async fn response_body_is_flat_error_object() {
        let resp = AppError::BadRequest("bad json".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "bad json" }));
    }
}

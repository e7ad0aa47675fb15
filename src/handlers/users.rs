//! User handlers: list, create, and a user's purchases.

use crate::error::{AppError, ErrorBody};
use crate::handlers::{json_body, path_id};
use crate::model::{CreateUserRequest, Purchase, User};
use crate::service::{RequestValidator, UserService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Store error, including a duplicate email", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = RequestValidator::new_user(json_body(payload)?)?;
    let created = UserService::create(&state.pool, &user).await?;
    tracing::info!(id = created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// List the purchases of one user. An unknown id yields an empty list.
#[utoipa::path(
    get,
    path = "/users/{userId}/purchases",
    tag = "users",
    params(("userId" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Purchases of the user", body = [Purchase]),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_user_purchases(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = UserService::purchases(&state.pool, path_id(user_id)?).await?;
    Ok(Json(purchases))
}

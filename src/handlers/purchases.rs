//! Purchase handlers: raw listing, joined listing, create.

use crate::error::{AppError, ErrorBody};
use crate::handlers::json_body;
use crate::model::{CreatePurchaseRequest, Purchase, PurchaseWithUser};
use crate::service::{PurchaseService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// List every purchase as stored.
#[utoipa::path(
    get,
    path = "/purchases",
    tag = "purchases",
    responses(
        (status = 200, description = "All purchases", body = [Purchase]),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_purchases(State(state): State<AppState>) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = PurchaseService::list(&state.pool).await?;
    Ok(Json(purchases))
}

/// List purchases with the details of the user who made them.
/// Purchases referencing a missing user are not included.
#[utoipa::path(
    get,
    path = "/purchases/all",
    tag = "purchases",
    responses(
        (status = 200, description = "Purchases joined with their users", body = [PurchaseWithUser]),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_purchases_with_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PurchaseWithUser>>, AppError> {
    let rows = PurchaseService::list_with_users(&state.pool).await?;
    Ok(Json(rows))
}

/// Register a new purchase.
#[utoipa::path(
    post,
    path = "/purchases",
    tag = "purchases",
    request_body = CreatePurchaseRequest,
    responses(
        (status = 201, description = "Purchase created", body = Purchase),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "Referenced user does not exist (foreign keys enforced)", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    payload: Result<Json<CreatePurchaseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let purchase = RequestValidator::new_purchase(json_body(payload)?)?;
    let created = PurchaseService::create(&state.pool, &purchase).await?;
    tracing::info!(id = created.id, user_id = purchase.user_id, "purchase created");
    Ok((StatusCode::CREATED, Json(created)))
}

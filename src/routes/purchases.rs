//! Purchase routes and the joined listing.

use crate::handlers::{create_purchase, list_purchases, list_purchases_with_users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn purchase_routes(state: AppState) -> Router {
    Router::new()
        .route("/purchases", get(list_purchases).post(create_purchase))
        .route("/purchases/all", get(list_purchases_with_users))
        .with_state(state)
}

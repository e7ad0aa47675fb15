//! User routes, `/users` and `/users/:userId/purchases`.

use crate::handlers::{create_user, list_user_purchases, list_users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:userId/purchases", get(list_user_purchases))
        .with_state(state)
}

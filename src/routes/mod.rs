//! Router assembly.

pub mod common;
pub mod docs;
pub mod purchases;
pub mod users;

pub use common::common_routes;
pub use docs::docs_routes;
pub use purchases::purchase_routes;
pub use users::user_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: resource routes, probes and documentation, with request tracing and a body size limit.
/// The limit replaces axum's 2 MiB default; over-limit bodies reach handlers as a `Json` rejection.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(user_routes(state.clone()))
        .merge(purchase_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

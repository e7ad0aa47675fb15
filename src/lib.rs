//! Purchase tracker: REST backend for users and their purchases over SQLite.

pub mod config;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DatabaseConfig, SchemaInitPolicy, ServerConfig};
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError};
pub use migration::{ensure_schema, initialize_schema};
pub use routes::{app, common_routes, docs_routes, purchase_routes, user_routes};
pub use service::{PurchaseService, RequestValidator, UserService};
pub use state::AppState;
pub use store::connect;

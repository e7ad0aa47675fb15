//! Swagger UI at `/api-docs`, backed by the generated document at `/openapi.json`.

use crate::doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

pub fn docs_routes() -> Router {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()).into()
}

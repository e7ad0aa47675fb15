//! OpenAPI document for the REST API, served by Swagger UI under `/api-docs`.

use crate::error::ErrorBody;
use crate::model::{CreatePurchaseRequest, CreateUserRequest, Purchase, PurchaseWithUser, User};
use crate::routes::common::{HealthBody, ReadyBody, VersionBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users and Purchases API",
        version = "1.0.0",
        description = "Manage users and the purchases they make."
    ),
    paths(
        crate::handlers::users::list_users,
        crate::handlers::users::create_user,
        crate::handlers::users::list_user_purchases,
        crate::handlers::purchases::list_purchases,
        crate::handlers::purchases::list_purchases_with_users,
        crate::handlers::purchases::create_purchase,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(schemas(
        User,
        Purchase,
        PurchaseWithUser,
        CreateUserRequest,
        CreatePurchaseRequest,
        ErrorBody,
        HealthBody,
        ReadyBody,
        VersionBody
    )),
    tags(
        (name = "users", description = "User registration and lookup"),
        (name = "purchases", description = "Purchase registration and listings"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

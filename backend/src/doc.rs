//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! health and users paths plus the schemas clients need to decode payloads
//! and error envelopes. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::api::health::HealthReport;
use crate::api::response::{ErrorInfo, PaginationInfo};
use crate::domain::error::ErrorCode;
use crate::models::{NewUserInput, User};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Backend starter API",
        description = "CRUD starter exposing users and health endpoints behind a uniform response envelope."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::api::health::health,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
    ),
    components(schemas(
        User,
        NewUserInput,
        HealthReport,
        ErrorCode,
        ErrorInfo,
        PaginationInfo
    )),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

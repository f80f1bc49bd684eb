//! Users API handlers.
//!
//! Routes validate their input first, so validation failures surface even
//! when the store is unavailable, then delegate to the [`UserStore`].

use actix_web::{get, post, web, HttpResponse};

use crate::api::handler::{respond, respond_paginated_result, respond_result};
use crate::api::response::PaginationInfo;
use crate::domain::error::AppError;
use crate::domain::result::AppResult;
use crate::domain::validation::{self, PageParams};
use crate::models::{NewUserInput, User};
use crate::storage::UserStore;

/// List users with pagination.
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("page" = Option<String>, Query, description = "1-based page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Items per page, defaults to 20 (max 100)")
    ),
    responses(
        (status = 200, description = "One page of users", body = [User]),
        (status = 422, description = "Invalid pagination parameters"),
        (status = 503, description = "Database not available")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    store: web::Data<UserStore>,
    query: web::Query<PageParams>,
) -> HttpResponse {
    respond_paginated_result(async move {
        let window = validation::validate_page_params(&query)?;
        let (users, total) = store.list(window.page, window.page_size)?;
        let pagination = PaginationInfo::new(total, window.page, window.page_size);
        Ok((users, pagination))
    })
    .await
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No user with this identifier"),
        (status = 503, description = "Database not available")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(store: web::Data<UserStore>, path: web::Path<String>) -> HttpResponse {
    respond_result(async move {
        let id = parse_user_id(&path)?;
        store.get(id)
    })
    .await
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUserInput,
    responses(
        (status = 200, description = "The created user", body = User),
        (status = 409, description = "Email already in use"),
        (status = 422, description = "Invalid user data"),
        (status = 503, description = "Database not available")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: web::Json<NewUserInput>,
) -> HttpResponse {
    respond(async move {
        let draft = validation::validate_new_user(&body)?;
        store.insert(draft)
    })
    .await
}

/// Parse and bound-check the id path segment.
fn parse_user_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request("Invalid user ID")),
    }
}

//! Adapters converting handler outcomes into wire envelopes.
//!
//! Every route returns through one of the four entry points below. Success
//! leaves the transport status at its default (200); failure sets the status
//! exactly once, from the error's paired code, and emits the error envelope.
//! Two handler conventions are supported over the same mechanism: an open
//! error channel (`E: Into<AppError>`, any failure coerced at the boundary)
//! and an already-normalized channel (`E = AppError`).

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use tracing::{error, warn};

use crate::api::response::{ErrorBody, PaginatedBody, PaginationInfo, SuccessBody};
use crate::domain::error::AppError;
use crate::domain::result::{try_catch, AppResult};

/// Build the error envelope and set the outbound status from the error.
///
/// This is the single place a non-default status is chosen.
pub(crate) fn error_to_response(error: &AppError) -> HttpResponse {
    let status =
        StatusCode::from_u16(error.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!(
            code = error.code().as_str(),
            status = error.status(),
            message = error.message(),
            "request failed"
        );
    } else {
        warn!(
            code = error.code().as_str(),
            status = error.status(),
            message = error.message(),
            "request rejected"
        );
    }
    HttpResponse::build(status).json(ErrorBody::from(error))
}

/// Convert an already-computed result into a response.
///
/// Useful when a route assembles its result outside the adapter entry points.
pub fn result_to_response<T: Serialize>(result: AppResult<T>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(SuccessBody::new(data)),
        Err(err) => error_to_response(&err),
    }
}

fn paginated_to_response<T: Serialize>(result: AppResult<(T, PaginationInfo)>) -> HttpResponse {
    match result {
        Ok((data, pagination)) => HttpResponse::Ok().json(PaginatedBody::new(data, pagination)),
        Err(err) => error_to_response(&err),
    }
}

/// Run a handler whose error channel may be any type coercible into
/// [`AppError`], and envelope the outcome.
///
/// Issue-list errors become a 422 validation envelope; unmapped errors become
/// a 500 internal envelope carrying the source's display form.
pub async fn respond<T, E, Fut>(handler: Fut) -> HttpResponse
where
    T: Serialize,
    E: Into<AppError>,
    Fut: Future<Output = Result<T, E>>,
{
    result_to_response(try_catch(handler).await)
}

/// Paginated variant of [`respond`]: the success payload is a page of items
/// plus its [`PaginationInfo`].
pub async fn respond_paginated<T, E, Fut>(handler: Fut) -> HttpResponse
where
    T: Serialize,
    E: Into<AppError>,
    Fut: Future<Output = Result<(T, PaginationInfo), E>>,
{
    paginated_to_response(try_catch(handler).await)
}

/// Run a handler whose error channel is already [`AppError`].
pub async fn respond_result<T, Fut>(handler: Fut) -> HttpResponse
where
    T: Serialize,
    Fut: Future<Output = AppResult<T>>,
{
    respond(handler).await
}

/// Paginated variant of [`respond_result`].
pub async fn respond_paginated_result<T, Fut>(handler: Fut) -> HttpResponse
where
    T: Serialize,
    Fut: Future<Output = AppResult<(T, PaginationInfo)>>,
{
    respond_paginated(handler).await
}

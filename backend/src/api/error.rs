//! Transport mapping for [`AppError`].
//!
//! Implementing [`ResponseError`] keeps failures raised outside the handler
//! adapters, such as extractor errors promoted via the configured error
//! handlers, on the same wire contract: the error envelope plus the paired
//! status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::api::handler::error_to_response;
use crate::domain::error::AppError;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        error_to_response(self)
    }
}

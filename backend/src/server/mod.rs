//! HTTP server assembly.

pub mod config;

use actix_web::web;

use crate::api::{health, users};
use crate::domain::error::AppError;

/// Register API routes and shared extractor behaviour.
///
/// `main` and the integration tests share this wiring. Extractor failures
/// (malformed JSON bodies, undecodable query strings) are promoted to
/// [`AppError`] so they use the standard error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::bad_request(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::bad_request(err.to_string()).into());

    cfg.service(
        web::scope("/api")
            .app_data(json_config)
            .app_data(query_config)
            .service(health::health)
            .service(users::list_users)
            .service(users::get_user)
            .service(users::create_user),
    );
}

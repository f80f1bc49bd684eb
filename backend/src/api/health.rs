//! Health endpoint.

use actix_web::{get, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::handler::respond_result;

/// Health report payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    /// Service status; `"ok"` while the process is serving
    #[schema(example = "ok")]
    pub status: String,
    /// Instant the report was produced
    pub timestamp: DateTime<Utc>,
    /// Crate version serving the request
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Report service health inside the standard envelope.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthReport)
    ),
    tags = ["health"],
    operation_id = "health"
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    respond_result(async {
        Ok(HealthReport {
            status: "ok".to_owned(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    })
    .await
}

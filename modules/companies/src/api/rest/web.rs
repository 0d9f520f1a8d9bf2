//! Service endpoints mounted next to the company routes.

use axum::Json;
use utoipa::OpenApi as _;

use super::dto::HealthDto;
use super::openapi::ApiDoc;

/// GET /health
///
/// Liveness check with a JSON body.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is alive", body = HealthDto))
)]
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_owned(),
    })
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

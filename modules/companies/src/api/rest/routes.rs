//! Route registration for the Companies REST API.

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;

use super::error::ApiError;
use super::{handlers, web};
use crate::domain::service::CompaniesService;

/// Mounts the company operations on `router`, injecting `service`.
#[must_use]
pub fn register_routes(router: Router, service: Arc<CompaniesService>) -> Router {
    router
        .route("/companies", get(handlers::list_companies))
        .route("/companies/{id}", get(handlers::get_company))
        .layer(Extension(service))
}

/// Full application router: company operations, health probes and the
/// `OpenAPI` document. A panicking handler answers with a generic 500.
#[must_use]
pub fn build_router(service: Arc<CompaniesService>) -> Router {
    let router = Router::new()
        .route("/health", get(web::health_check))
        .route("/healthz", get(web::healthz))
        .route("/openapi.json", get(web::openapi_json));

    register_routes(router, service).layer(CatchPanicLayer::custom(handle_panic))
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Request handler panicked");
    ApiError::internal().into_response()
}

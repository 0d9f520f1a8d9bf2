//! REST handlers for the Companies module.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};

use super::dto::{CompanyListResponse, EnrichedCompanyDto, ErrorBody, ListCompaniesQuery};
use super::error::ApiResult;
use crate::domain::service::CompaniesService;

/// GET /companies
///
/// List companies with their employees, filtered and paginated.
#[utoipa::path(
    get,
    path = "/companies",
    tag = "Companies",
    params(ListCompaniesQuery),
    responses(
        (status = 200, description = "Page of companies", body = CompanyListResponse),
        (status = 500, description = "Unexpected failure", body = ErrorBody),
    )
)]
pub async fn list_companies(
    Extension(service): Extension<Arc<CompaniesService>>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<CompanyListResponse>> {
    let pairs = match pairs {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring undecodable query string");
            Vec::new()
        }
    };
    let query = ListCompaniesQuery::from_pairs(pairs);
    let page = service
        .list_companies(&query.to_filter(), query.to_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /companies/{id}
///
/// Get a single company, with its employees, by id.
#[utoipa::path(
    get,
    path = "/companies/{id}",
    tag = "Companies",
    params(("id" = String, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = EnrichedCompanyDto),
        (status = 404, description = "Company not found", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody),
    )
)]
pub async fn get_company(
    Extension(service): Extension<Arc<CompaniesService>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<EnrichedCompanyDto>> {
    // An undecodable segment cannot name any company.
    let id = match id {
        Ok(Path(id)) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Undecodable company id");
            String::new()
        }
    };
    let company = service.get_company_by_raw_id(&id).await?;
    Ok(Json(company.into()))
}

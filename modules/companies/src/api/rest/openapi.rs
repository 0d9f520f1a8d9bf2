//! `OpenAPI` document for the Companies REST API.

use utoipa::OpenApi;

use super::dto::{CompanyListResponse, EnrichedCompanyDto, ErrorBody, HealthDto, PageMetadataDto};
use super::{handlers, web};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Companies API",
        description = "Read-only access to companies and their employees"
    ),
    paths(handlers::list_companies, handlers::get_company, web::health_check),
    components(schemas(
        CompanyListResponse,
        EnrichedCompanyDto,
        PageMetadataDto,
        ErrorBody,
        HealthDto
    )),
    tags(
        (name = "Companies", description = "Company listing and lookup"),
        (name = "Health", description = "Liveness probes")
    )
)]
pub struct ApiDoc;

//! REST DTOs for the Companies module.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::filter::{CompanyFilter, parse_active_flag};
use crate::domain::model::EnrichedCompany;
use crate::domain::pagination::{CompanyPage, PageInfo, PageRequest};

/// Query parameters for listing companies.
///
/// Everything arrives as raw text; an empty value counts as absent. When a
/// key repeats, its first value is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCompaniesQuery {
    /// Case-insensitive substring of the company name.
    pub name: Option<String>,
    /// `true` (any case) keeps active companies; any other value keeps inactive ones.
    pub active: Option<String>,
    /// Case-insensitive substring of an employee's `first_name last_name`.
    pub employee: Option<String>,
    /// Page size. Defaults to 10.
    pub limit: Option<String>,
    /// Number of companies to skip. Defaults to 0.
    pub offset: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl ListCompaniesQuery {
    /// Builds the query from decoded `key=value` pairs in request order.
    ///
    /// Unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "active" => &mut query.active,
                "employee" => &mut query.employee,
                "limit" => &mut query.limit,
                "offset" => &mut query.offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    #[must_use]
    pub fn to_filter(&self) -> CompanyFilter {
        CompanyFilter {
            name: present(self.name.as_ref()).map(ToOwned::to_owned),
            active: present(self.active.as_ref()).map(parse_active_flag),
            employee: present(self.employee.as_ref()).map(ToOwned::to_owned),
        }
    }

    #[must_use]
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// A company with its `employees` array; all source fields are passed through.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct EnrichedCompanyDto(pub EnrichedCompany);

impl From<EnrichedCompany> for EnrichedCompanyDto {
    fn from(company: EnrichedCompany) -> Self {
        Self(company)
    }
}

/// Pagination metadata for a company listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMetadataDto {
    /// Number of companies matching the filters, before pagination.
    pub total: usize,
    /// Effective page size.
    pub limit: i64,
    /// Effective offset.
    pub offset: i64,
    /// Number of companies in `data`.
    pub count: usize,
}

impl From<PageInfo> for PageMetadataDto {
    fn from(info: PageInfo) -> Self {
        Self {
            total: info.total,
            limit: info.limit,
            offset: info.offset,
            count: info.count,
        }
    }
}

/// Response DTO for the company listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub data: Vec<EnrichedCompanyDto>,
    pub metadata: PageMetadataDto,
}

impl From<CompanyPage> for CompanyListResponse {
    fn from(page: CompanyPage) -> Self {
        Self {
            data: page.items.into_iter().map(Into::into).collect(),
            metadata: page.page_info.into(),
        }
    }
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

//! Domain service for the Companies module.

use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::DomainError;
use super::filter::CompanyFilter;
use super::join::attach_employees;
use super::model::EnrichedCompany;
use super::pagination::{CompanyPage, PageRequest, paginate, parse_leading_int};
use super::repo::CompaniesRepository;

/// Domain service for company lookups.
///
/// Each call runs the full load, join, filter and paginate cycle against the
/// repository. Nothing is cached between calls.
pub struct CompaniesService {
    repo: Arc<dyn CompaniesRepository>,
}

impl CompaniesService {
    /// Creates a new `CompaniesService` with the given repository.
    #[must_use]
    pub fn new(repo: Arc<dyn CompaniesRepository>) -> Self {
        Self { repo }
    }

    /// Loads both record sets and attaches employees to companies.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn load_enriched(&self) -> Result<Vec<EnrichedCompany>, DomainError> {
        let (companies, employees) =
            tokio::try_join!(self.repo.load_companies(), self.repo.load_employees())?;
        debug!(
            companies = companies.len(),
            employees = employees.len(),
            "Loaded company dataset"
        );
        Ok(attach_employees(companies, &employees))
    }

    /// Lists companies matching `filter`, sliced to `page`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    #[instrument(skip(self))]
    pub async fn list_companies(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<CompanyPage, DomainError> {
        let joined = self.load_enriched().await?;
        let filtered = filter.apply(joined);
        let result = paginate(filtered, page);
        debug!(
            total = result.page_info.total,
            count = result.page_info.count,
            "Listed companies"
        );
        Ok(result)
    }

    /// Returns the first company whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no company matches.
    #[instrument(skip(self))]
    pub async fn get_company(&self, id: i64) -> Result<EnrichedCompany, DomainError> {
        self.load_enriched()
            .await?
            .into_iter()
            .find(|c| c.company.id() == Some(id))
            .ok_or_else(|| DomainError::not_found(id.to_string()))
    }

    /// Looks a company up by a raw path segment.
    ///
    /// The segment is parsed leniently (`"12abc"` is 12). A segment without a
    /// leading integer cannot match any company and yields `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing matches, or propagates repository
    /// failures.
    pub async fn get_company_by_raw_id(&self, raw: &str) -> Result<EnrichedCompany, DomainError> {
        match parse_leading_int(raw) {
            Some(id) => self.get_company(id).await,
            None => {
                // Still load the dataset so repository failures surface as 500.
                self.load_enriched().await?;
                Err(DomainError::not_found(raw))
            }
        }
    }
}

//! File-system backed repository.

use async_trait::async_trait;

use super::json_dir::JsonDirLoader;
use crate::config::CompaniesConfig;
use crate::domain::error::DomainError;
use crate::domain::model::{Company, Employee};
use crate::domain::repo::CompaniesRepository;

/// Reads companies and employees from two directories of JSON files.
///
/// The directories are re-read on every call.
#[derive(Debug, Clone)]
pub struct FsCompaniesRepository {
    companies: JsonDirLoader,
    employees: JsonDirLoader,
}

impl FsCompaniesRepository {
    #[must_use]
    pub fn new(config: &CompaniesConfig) -> Self {
        Self {
            companies: JsonDirLoader::new(&config.companies_dir),
            employees: JsonDirLoader::new(&config.employees_dir),
        }
    }
}

#[async_trait]
impl CompaniesRepository for FsCompaniesRepository {
    async fn load_companies(&self) -> Result<Vec<Company>, DomainError> {
        Ok(self
            .companies
            .load()
            .await
            .into_iter()
            .map(Company::from)
            .collect())
    }

    async fn load_employees(&self) -> Result<Vec<Employee>, DomainError> {
        Ok(self
            .employees
            .load()
            .await
            .into_iter()
            .map(Employee::from)
            .collect())
    }
}

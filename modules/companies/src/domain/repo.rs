//! Repository trait for company and employee records.

use async_trait::async_trait;

use super::error::DomainError;
use super::model::{Company, Employee};

/// Source of company and employee records.
///
/// Every call reads the backing store afresh; implementations must not keep
/// records between calls. The file-backed implementation recovers from bad
/// files on its own and only fails on unexpected errors.
#[async_trait]
pub trait CompaniesRepository: Send + Sync {
    /// Loads all company records in load order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` on an unexpected failure.
    async fn load_companies(&self) -> Result<Vec<Company>, DomainError>;

    /// Loads all employee records in load order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` on an unexpected failure.
    async fn load_employees(&self) -> Result<Vec<Employee>, DomainError>;
}

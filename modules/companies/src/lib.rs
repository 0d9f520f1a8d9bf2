//! Companies Module Implementation
//!
//! Read-only HTTP API over a file-backed dataset of companies and their
//! employees.
//!
//! ## Architecture
//!
//! - **Per-request reload**: every call re-reads the data directories; there is no cache
//! - **Pipeline**: load, join employees to companies, filter, paginate
//! - **Schema-less records**: unknown fields are passed through untouched

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

// === CONFIGURATION ===
pub mod config;
pub use config::CompaniesConfig;

// === INTERNAL MODULES ===
pub mod api;
pub mod domain;
pub mod infra;

pub use domain::service::CompaniesService;
pub use infra::FsCompaniesRepository;

/// Builds the service backed by the directories named in `config`.
#[must_use]
pub fn fs_service(config: &CompaniesConfig) -> Arc<CompaniesService> {
    let repo = Arc::new(FsCompaniesRepository::new(config));
    Arc::new(CompaniesService::new(repo))
}

/// Builds the full HTTP router for the directories named in `config`.
#[must_use]
pub fn router(config: &CompaniesConfig) -> axum::Router {
    api::rest::routes::build_router(fs_service(config))
}

//! Configuration for the Companies module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the company and employee data files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CompaniesConfig {
    /// Directory scanned for company `*.json` files.
    /// Default: `data/companies`
    pub companies_dir: PathBuf,

    /// Directory scanned for employee `*.json` files.
    /// Default: `data/employees`
    pub employees_dir: PathBuf,
}

impl Default for CompaniesConfig {
    fn default() -> Self {
        Self {
            companies_dir: PathBuf::from("data/companies"),
            employees_dir: PathBuf::from("data/employees"),
        }
    }
}

impl CompaniesConfig {
    /// Config pointing at `<root>/companies` and `<root>/employees`.
    #[must_use]
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            companies_dir: root.join("companies"),
            employees_dir: root.join("employees"),
        }
    }
}

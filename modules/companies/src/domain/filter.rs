//! Optional filter stages applied to joined companies.
//!
//! Stages run in a fixed order (name, active, employee). Each one is a no-op
//! when its parameter is absent, and a record missing the field a stage reads
//! fails that stage.

use super::model::EnrichedCompany;

/// Filter parameters for the company listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    /// Case-insensitive substring of the company name.
    pub name: Option<String>,
    /// Required value of the `active` flag.
    pub active: Option<bool>,
    /// Case-insensitive substring of any employee's full name.
    pub employee: Option<String>,
}

impl CompanyFilter {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn with_employee(mut self, employee: impl Into<String>) -> Self {
        self.employee = Some(employee.into());
        self
    }

    /// Runs every configured stage over `companies`, in order.
    #[must_use]
    pub fn apply(&self, companies: Vec<EnrichedCompany>) -> Vec<EnrichedCompany> {
        let companies = by_name(companies, self.name.as_deref());
        let companies = by_active(companies, self.active);
        by_employee(companies, self.employee.as_deref())
    }
}

/// Interprets an `active` query value: `"true"` in any case is true,
/// anything else is false.
#[must_use]
pub fn parse_active_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

fn contains_folded(haystack: &str, needle_folded: &str) -> bool {
    haystack.to_lowercase().contains(needle_folded)
}

/// Keeps companies whose name contains `query`, ignoring case.
#[must_use]
pub fn by_name(companies: Vec<EnrichedCompany>, query: Option<&str>) -> Vec<EnrichedCompany> {
    let Some(query) = query else {
        return companies;
    };
    let needle = query.to_lowercase();
    companies
        .into_iter()
        .filter(|c| c.company.name().is_some_and(|n| contains_folded(n, &needle)))
        .collect()
}

/// Keeps companies whose `active` flag equals `wanted`.
#[must_use]
pub fn by_active(companies: Vec<EnrichedCompany>, wanted: Option<bool>) -> Vec<EnrichedCompany> {
    let Some(wanted) = wanted else {
        return companies;
    };
    companies
        .into_iter()
        .filter(|c| c.company.active() == Some(wanted))
        .collect()
}

/// Keeps companies with at least one employee whose full name contains
/// `query`, ignoring case.
#[must_use]
pub fn by_employee(companies: Vec<EnrichedCompany>, query: Option<&str>) -> Vec<EnrichedCompany> {
    let Some(query) = query else {
        return companies;
    };
    let needle = query.to_lowercase();
    companies
        .into_iter()
        .filter(|c| {
            c.employees
                .iter()
                .filter_map(super::model::Employee::full_name)
                .any(|full| contains_folded(&full, &needle))
        })
        .collect()
}

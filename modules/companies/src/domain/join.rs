//! Attaches employees to their companies.

use super::model::{Company, Employee, EnrichedCompany, ids_match};

/// Pairs every company with the employees whose `company_id` equals its `id`.
///
/// Company order is preserved, and so is the relative order of the employees
/// attached to each company. An employee may be attached to several companies
/// when ids repeat; one referencing no known company is simply dropped.
#[must_use]
pub fn attach_employees(companies: Vec<Company>, employees: &[Employee]) -> Vec<EnrichedCompany> {
    companies
        .into_iter()
        .map(|company| {
            let staff = employees
                .iter()
                .filter(|e| ids_match(e.company_id(), company.id_value()))
                .cloned()
                .collect();
            EnrichedCompany::new(company, staff)
        })
        .collect()
}

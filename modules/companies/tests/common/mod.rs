#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for companies integration tests

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use companies::CompaniesConfig;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// A throwaway dataset on disk with `companies/` and `employees/` directories.
pub struct TestDataset {
    dir: TempDir,
}

impl TestDataset {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(dir.path().join("companies")).unwrap();
        std::fs::create_dir(dir.path().join("employees")).unwrap();
        Self { dir }
    }

    /// Dataset with one company (Acme, id 1) and one employee (Jo Doe).
    pub fn acme() -> Self {
        let ds = Self::new();
        ds.companies_file(
            "companies.json",
            &serde_json::json!([{ "id": 1, "name": "Acme", "active": true }]),
        );
        ds.employees_file(
            "employees.json",
            &serde_json::json!([
                { "id": 1, "company_id": 1, "first_name": "Jo", "last_name": "Doe" }
            ]),
        );
        ds
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn companies_dir(&self) -> PathBuf {
        self.root().join("companies")
    }

    pub fn employees_dir(&self) -> PathBuf {
        self.root().join("employees")
    }

    pub fn config(&self) -> CompaniesConfig {
        CompaniesConfig::from_root(self.root())
    }

    pub fn companies_file(&self, name: &str, records: &Value) {
        self.raw_companies_file(name, &records.to_string());
    }

    pub fn employees_file(&self, name: &str, records: &Value) {
        self.raw_employees_file(name, &records.to_string());
    }

    pub fn raw_companies_file(&self, name: &str, content: &str) {
        std::fs::write(self.companies_dir().join(name), content).unwrap();
    }

    pub fn raw_employees_file(&self, name: &str, content: &str) {
        std::fs::write(self.employees_dir().join(name), content).unwrap();
    }

    pub fn router(&self) -> Router {
        companies::router(&self.config())
    }
}

/// Sends `GET uri` through `router` and returns the status and JSON body.
pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Ids of the companies in a listing response, in order.
pub fn data_ids(json: &Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .collect()
}

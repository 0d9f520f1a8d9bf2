#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the companies REST API.
//!
//! Each test writes a dataset to a temp directory, builds the real router and
//! sends requests with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use common::{TestDataset, data_ids, get_json};
use serde_json::json;

/// Twelve companies spread over two files, with employees in two files.
fn directory_dataset() -> TestDataset {
    let ds = TestDataset::new();
    ds.companies_file(
        "a.json",
        &json!([
            { "id": 1, "name": "Acme Corp", "active": true, "industry": "rockets" },
            { "id": 2, "name": "Globex", "active": false },
            { "id": 3, "name": "Initech", "active": true },
            { "id": 4, "name": "Umbrella", "active": false },
            { "id": 5, "name": "Acme Labs", "active": false },
            { "id": 6, "name": "Hooli", "active": true }
        ]),
    );
    ds.companies_file(
        "b.json",
        &json!([
            { "id": 7, "name": "Vehement", "active": true },
            { "id": 8, "name": "Massive Dynamic", "active": true },
            { "id": 9, "name": "Soylent", "active": false },
            { "id": 10, "name": "Tyrell", "active": true },
            { "id": 11, "name": "Wayne Enterprises", "active": true },
            { "id": 12, "name": "Stark Industries", "active": false }
        ]),
    );
    ds.employees_file(
        "first.json",
        &json!([
            { "id": 1, "company_id": 1, "first_name": "Jo", "last_name": "Doe" },
            { "id": 2, "company_id": 3, "first_name": "Peter", "last_name": "Gibbons" },
            { "id": 3, "company_id": 5, "first_name": "Wile", "last_name": "Coyote" }
        ]),
    );
    ds.employees_file(
        "second.json",
        &json!([
            { "id": 4, "company_id": 1, "first_name": "Road", "last_name": "Runner" },
            { "id": 5, "company_id": 11, "first_name": "Bruce", "last_name": "Wayne" },
            { "id": 6, "company_id": 42, "first_name": "Nobody", "last_name": "Home" }
        ]),
    );
    ds
}

// ==================== Scenarios ====================

#[tokio::test]
async fn test_list_single_company_with_employee() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "data": [{
                "id": 1,
                "name": "Acme",
                "active": true,
                "employees": [
                    { "id": 1, "company_id": 1, "first_name": "Jo", "last_name": "Doe" }
                ]
            }],
            "metadata": { "total": 1, "limit": 10, "offset": 0, "count": 1 }
        })
    );
}

#[tokio::test]
async fn test_get_company_by_id() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Acme");
    assert_eq!(json["employees"][0]["first_name"], "Jo");

    let (_, listing) = get_json(ds.router(), "/companies").await;
    assert_eq!(json, listing["data"][0]);
}

#[tokio::test]
async fn test_get_company_not_found() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Company not found" }));
}

#[tokio::test]
async fn test_get_company_with_non_numeric_id_is_not_found() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Company not found");
}

#[tokio::test]
async fn test_get_company_with_trailing_garbage_id() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies/1xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_corrupt_company_file_is_skipped() {
    let ds = TestDataset::acme();
    ds.raw_companies_file("broken.json", "[{ \"id\": 2, \"name\": ");
    ds.companies_file("object.json", &json!({ "id": 3, "name": "Not an array" }));
    ds.companies_file("more.json", &json!([{ "id": 4, "name": "Globex", "active": false }]));

    let (status, json) = get_json(ds.router(), "/companies").await;

    assert_eq!(status, StatusCode::OK);
    let mut ids = data_ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 4]);
    assert_eq!(json["metadata"]["total"], 2);
}

#[tokio::test]
async fn test_non_json_files_are_ignored() {
    let ds = TestDataset::acme();
    ds.raw_companies_file("notes.txt", "[{\"id\": 50, \"name\": \"Hidden\"}]");
    ds.raw_companies_file("backup.json.bak", "[{\"id\": 51, \"name\": \"Hidden\"}]");

    let (_, json) = get_json(ds.router(), "/companies").await;
    assert_eq!(data_ids(&json), vec![1]);
}

#[tokio::test]
async fn test_missing_directories_yield_empty_listing() {
    let ds = TestDataset::new();
    std::fs::remove_dir(ds.companies_dir()).unwrap();
    std::fs::remove_dir(ds.employees_dir()).unwrap();

    let (status, json) = get_json(ds.router(), "/companies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "data": [], "metadata": { "total": 0, "limit": 10, "offset": 0, "count": 0 } })
    );

    let (status, _) = get_json(ds.router(), "/companies/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_employees_directory_keeps_companies() {
    let ds = TestDataset::acme();
    std::fs::remove_file(ds.employees_dir().join("employees.json")).unwrap();
    std::fs::remove_dir(ds.employees_dir()).unwrap();

    let (status, json) = get_json(ds.router(), "/companies/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["employees"], json!([]));
}

#[tokio::test]
async fn test_records_with_missing_fields_pass_through() {
    let ds = TestDataset::new();
    ds.companies_file(
        "c.json",
        &json!([
            { "id": 1 },
            { "name": "No id", "active": true },
            { "id": 3, "name": "Complete", "active": true }
        ]),
    );

    let (status, json) = get_json(ds.router(), "/companies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["metadata"]["total"], 3);
    assert_eq!(json["data"][1], json!({ "name": "No id", "active": true, "employees": [] }));

    let (status, json) = get_json(ds.router(), "/companies?name=o&active=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["metadata"]["total"], 2);
}

// ==================== Filtering ====================

#[tokio::test]
async fn test_name_filter() {
    let ds = directory_dataset();

    let (status, json) = get_json(ds.router(), "/companies?name=ACME").await;
    assert_eq!(status, StatusCode::OK);
    let mut ids = data_ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 5]);
    assert_eq!(json["metadata"]["total"], 2);
}

#[tokio::test]
async fn test_active_filter() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies?active=TRUE&limit=100").await;
    let mut ids = data_ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3, 6, 7, 8, 10, 11]);

    let (_, json) = get_json(ds.router(), "/companies?active=no&limit=100").await;
    let mut ids = data_ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![2, 4, 5, 9, 12]);
}

#[tokio::test]
async fn test_employee_filter() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies?employee=runner").await;
    assert_eq!(data_ids(&json), vec![1]);

    let (_, json) = get_json(ds.router(), "/companies?employee=e%20w").await;
    assert_eq!(data_ids(&json), vec![11]);

    let (_, json) = get_json(ds.router(), "/companies?employee=nobody").await;
    assert!(data_ids(&json).is_empty());
    assert_eq!(json["metadata"]["total"], 0);
}

#[tokio::test]
async fn test_empty_filter_values_are_ignored() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies?name=&active=&employee=").await;
    assert_eq!(json["metadata"]["total"], 12);
}

#[tokio::test]
async fn test_combined_filters_equal_intersection() {
    let ds = directory_dataset();

    let (_, combined) =
        get_json(ds.router(), "/companies?name=acme&active=true&employee=jo&limit=100").await;

    let (_, by_name) = get_json(ds.router(), "/companies?name=acme&limit=100").await;
    let (_, by_active) = get_json(ds.router(), "/companies?active=true&limit=100").await;
    let (_, by_employee) = get_json(ds.router(), "/companies?employee=jo&limit=100").await;

    let active_ids = data_ids(&by_active);
    let employee_ids = data_ids(&by_employee);
    let mut expected: Vec<i64> = data_ids(&by_name)
        .into_iter()
        .filter(|id| active_ids.contains(id) && employee_ids.contains(id))
        .collect();
    expected.sort_unstable();

    let mut got = data_ids(&combined);
    got.sort_unstable();
    assert_eq!(got, expected);
    assert_eq!(got, vec![1]);
}

// ==================== Join ====================

#[tokio::test]
async fn test_join_attaches_exactly_matching_employees() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies?limit=100").await;

    for company in json["data"].as_array().unwrap() {
        let id = company["id"].as_i64().unwrap();
        let employees = company["employees"].as_array().unwrap();
        assert!(employees.iter().all(|e| e["company_id"].as_i64() == Some(id)));
    }

    let (_, acme) = get_json(ds.router(), "/companies/1").await;
    let mut names: Vec<&str> = acme["employees"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["first_name"].as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Jo", "Road"]);
}

#[tokio::test]
async fn test_passthrough_fields_are_preserved() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies/1").await;
    assert_eq!(json["industry"], "rockets");
}

// ==================== Pagination ====================

#[tokio::test]
async fn test_default_page_size_is_ten() {
    let ds = directory_dataset();

    let (_, json) = get_json(ds.router(), "/companies").await;
    assert_eq!(
        json["metadata"],
        json!({ "total": 12, "limit": 10, "offset": 0, "count": 10 })
    );
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_pages_cover_dataset_without_overlap() {
    let ds = directory_dataset();

    let (_, first) = get_json(ds.router(), "/companies?limit=5&offset=0").await;
    let (_, second) = get_json(ds.router(), "/companies?limit=5&offset=5").await;
    let (_, third) = get_json(ds.router(), "/companies?limit=5&offset=10").await;

    assert_eq!(third["metadata"]["count"], 2);

    let mut all: Vec<i64> = [first, second, third].iter().flat_map(data_ids).collect();
    all.sort_unstable();
    assert_eq!(all, (1..=12).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_offset_beyond_total_yields_empty_page() {
    let ds = directory_dataset();

    let (status, json) = get_json(ds.router(), "/companies?offset=12").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
    assert_eq!(
        json["metadata"],
        json!({ "total": 12, "limit": 10, "offset": 12, "count": 0 })
    );
}

#[tokio::test]
async fn test_invalid_pagination_values_fall_back_to_defaults() {
    let ds = directory_dataset();

    let (status, json) = get_json(ds.router(), "/companies?limit=abc&offset=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["metadata"]["limit"], 10);
    assert_eq!(json["metadata"]["offset"], 0);

    let (_, json) = get_json(ds.router(), "/companies?limit=0").await;
    assert_eq!(json["metadata"]["limit"], 10);
    assert_eq!(json["metadata"]["count"], 10);
}

#[tokio::test]
async fn test_negative_pagination_values_are_clamped() {
    let ds = directory_dataset();

    let (status, json) = get_json(ds.router(), "/companies?limit=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
    assert_eq!(
        json["metadata"],
        json!({ "total": 12, "limit": 0, "offset": 0, "count": 0 })
    );

    let (_, json) = get_json(ds.router(), "/companies?limit=3&offset=-4").await;
    assert_eq!(
        json["metadata"],
        json!({ "total": 12, "limit": 3, "offset": 0, "count": 3 })
    );
}

#[tokio::test]
async fn test_count_follows_window_formula() {
    let ds = directory_dataset();

    for (limit, offset) in [(1, 0), (4, 3), (10, 10), (7, 11), (20, 0), (5, 30)] {
        let uri = format!("/companies?limit={limit}&offset={offset}");
        let (_, json) = get_json(ds.router(), &uri).await;
        let total = json["metadata"]["total"].as_i64().unwrap();
        let expected = i64::min(limit, (total - offset).max(0));
        assert_eq!(json["metadata"]["count"].as_i64(), Some(expected), "{uri}");
    }
}

#[tokio::test]
async fn test_repeated_query_keys_use_first_value() {
    let ds = directory_dataset();

    let (status, json) = get_json(ds.router(), "/companies?limit=5&limit=6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["metadata"],
        json!({ "total": 12, "limit": 5, "offset": 0, "count": 5 })
    );

    let (status, json) = get_json(ds.router(), "/companies?name=ac&name=zz").await;
    assert_eq!(status, StatusCode::OK);
    let mut ids = data_ids(&json);
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 5]);
}

#[tokio::test]
async fn test_undecodable_company_id_is_not_found() {
    let ds = TestDataset::acme();

    let (status, json) = get_json(ds.router(), "/companies/%FF").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "error": "Company not found" }));
}

// ==================== Idempotence and reload ====================

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let ds = directory_dataset();
    let uri = "/companies?active=true&limit=4&offset=1";

    let (_, first) = get_json(ds.router(), uri).await;
    let (_, second) = get_json(ds.router(), uri).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_dataset_changes_are_visible_without_restart() {
    let ds = TestDataset::acme();
    let router = ds.router();

    let (_, before) = get_json(router.clone(), "/companies").await;
    assert_eq!(before["metadata"]["total"], 1);

    ds.companies_file("late.json", &json!([{ "id": 2, "name": "Latecomer", "active": true }]));

    let (_, after) = get_json(router, "/companies").await;
    assert_eq!(after["metadata"]["total"], 2);
}

// ==================== Service endpoints ====================

#[tokio::test]
async fn test_health_endpoint() {
    let ds = TestDataset::new();

    let (status, json) = get_json(ds.router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let ds = TestDataset::new();

    let (status, json) = get_json(ds.router(), "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/companies/{id}"].is_object());
}

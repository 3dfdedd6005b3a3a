//! List envelope and navigation links.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn with_yards(count: usize) -> TestApp {
    let app = TestApp::new();
    for i in 1..=count {
        app.create("/api/patios", json!({ "nome": format!("Pátio {i}") }))
            .await;
    }
    app
}

#[tokio::test]
async fn test_first_page_has_self_and_next_only() {
    let app = with_yards(25).await;

    let response = app
        .send(
            "GET",
            "/api/patios?page=1&pageSize=10",
            String::new(),
            &[("host", "api.test"), ("x-forwarded-proto", "https")],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["pageSize"], 10);
    assert_eq!(response.body["totalCount"], 25);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 10);
    assert_eq!(response.body["items"][0]["id"], 1);

    assert_eq!(response.body["links"][0]["rel"], "self");
    assert_eq!(response.body["links"][0]["method"], "GET");
    assert_eq!(
        response.link("self").as_deref(),
        Some("https://api.test/api/patios?page=1&pageSize=10")
    );
    assert_eq!(
        response.link("next").as_deref(),
        Some("https://api.test/api/patios?page=2&pageSize=10")
    );
    assert!(response.link("prev").is_none());
}

#[tokio::test]
async fn test_last_page_has_prev_and_no_next() {
    let app = with_yards(25).await;

    let response = app.request("GET", "/api/patios?page=3&pageSize=10", None).await;
    assert_eq!(response.body["items"].as_array().unwrap().len(), 5);
    assert!(response.link("next").is_none());
    assert!(response.link("prev").unwrap().ends_with("?page=2&pageSize=10"));
}

#[tokio::test]
async fn test_exact_multiple_has_no_next() {
    let app = with_yards(20).await;

    let response = app.request("GET", "/api/patios?page=2&pageSize=10", None).await;
    assert_eq!(response.body["items"].as_array().unwrap().len(), 10);
    assert!(response.link("next").is_none());
}

#[tokio::test]
async fn test_largest_page_number_is_an_empty_page() {
    let app = with_yards(3).await;

    let response = app
        .request("GET", "/api/patios?page=9223372036854775807", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["page"], json!(9223372036854775807_u64));
    assert_eq!(response.body["totalCount"], 3);
    assert!(response.link("next").is_none());
}

#[tokio::test]
async fn test_invalid_parameters_fall_back_to_defaults() {
    let app = with_yards(3).await;

    for query in ["page=0&pageSize=0", "page=-2&pageSize=101", "page=abc&pageSize=x"] {
        let response = app
            .request("GET", &format!("/api/patios?{query}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{query}");
        assert_eq!(response.body["page"], 1, "{query}");
        assert_eq!(response.body["pageSize"], 20, "{query}");
    }
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = with_yards(3).await;

    let response = app.request("GET", "/api/patios?page=5", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["totalCount"], 3);
    assert!(response.link("prev").is_some());
    assert!(response.link("next").is_none());
}

#[tokio::test]
async fn test_links_fall_back_to_bind_address_without_host() {
    let app = with_yards(1).await;

    let response = app.request("GET", "/api/patios", None).await;
    assert_eq!(
        response.link("self").as_deref(),
        Some("http://0.0.0.0:8080/api/patios?page=1&pageSize=20")
    );
}

#[tokio::test]
async fn test_links_use_uri_authority_without_host_header() {
    let app = with_yards(1).await;

    let response = app
        .send("GET", "http://frota.example.com/api/patios", String::new(), &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.link("self").as_deref(),
        Some("http://frota.example.com/api/patios?page=1&pageSize=20")
    );
}

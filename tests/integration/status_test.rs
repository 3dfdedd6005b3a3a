//! Status group and status endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, moto_body};

#[tokio::test]
async fn test_status_requires_existing_group() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/statuses",
            Some(json!({ "nome": "OK", "statusGrupoId": 42 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!("StatusGrupoId inválido."));
}

#[tokio::test]
async fn test_status_serializes_group_id_in_camel_case() {
    let app = TestApp::new();
    let grupo = app
        .create("/api/statusgrupos", json!({ "nome": "Operacional" }))
        .await;

    let created = app
        .request(
            "POST",
            "/api/statuses",
            Some(json!({ "nome": "OK", "statusGrupoId": grupo })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.headers["location"], "/api/statuses/1");
    assert_eq!(created.body["statusGrupoId"], grupo);
}

#[tokio::test]
async fn test_group_with_statuses_cannot_be_deleted() {
    let app = TestApp::new();
    let (_, _, status) = app.create_references().await;

    let refused = app.request("DELETE", "/api/statusgrupos/1", None).await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        refused.body,
        json!("Não é possível remover StatusGrupo que contém Statuses.")
    );

    let removed = app
        .request("DELETE", &format!("/api/statuses/{status}"), None)
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let deleted = app.request("DELETE", "/api/statusgrupos/1", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_status_in_use_cannot_be_deleted() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    app.create("/api/motos", moto_body("ABC1D23", "CHASSI1", refs))
        .await;

    let refused = app
        .request("DELETE", &format!("/api/statuses/{}", refs.2), None)
        .await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        refused.body,
        json!("Não é possível remover Status com motos associadas.")
    );
}

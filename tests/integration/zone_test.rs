//! Zone endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, moto_body};

#[tokio::test]
async fn test_zone_crud_round_trip() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/zonas", Some(json!({ "nome": "Norte", "letra": "N" })))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.headers["location"], "/api/zonas/1");
    assert_eq!(created.body, json!({ "id": 1, "nome": "Norte", "letra": "N" }));

    let fetched = app.request("GET", "/api/zonas/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["nome"], "Norte");

    let updated = app
        .request("PUT", "/api/zonas/1", Some(json!({ "nome": "Sul", "letra": "S" })))
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body, json!({ "id": 1, "nome": "Sul", "letra": "S" }));

    let deleted = app.request("DELETE", "/api/zonas/1", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", "/api/zonas/1", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.raw_len, 0);
}

#[tokio::test]
async fn test_zone_letter_must_be_one_character() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/zonas", Some(json!({ "nome": "Norte", "letra": "NO" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!("Nome obrigatório e Letra deve ter 1 caractere.")
    );

    let blank = app
        .request("POST", "/api/zonas", Some(json!({ "nome": "  ", "letra": "N" })))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_and_non_numeric_ids_are_not_found() {
    let app = TestApp::new();

    for path in ["/api/zonas/99", "/api/zonas/abc"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }

    let update = app
        .request("PUT", "/api/zonas/7", Some(json!({ "nome": "Leste", "letra": "L" })))
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", "/api/zonas/7", None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_zone_with_motos_cannot_be_deleted() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    app.create("/api/motos", moto_body("ABC1D23", "CHASSI1", refs))
        .await;

    let response = app
        .request("DELETE", &format!("/api/zonas/{}", refs.0), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!("Não é possível remover zona com motos associadas.")
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .send("POST", "/api/zonas", "{ \"nome\": ".to_string(), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.is_string());

    let missing_field = app
        .request("POST", "/api/zonas", Some(json!({ "nome": "Norte" })))
        .await;
    assert_eq!(missing_field.status, StatusCode::BAD_REQUEST);
}

//! Yard endpoints and the delete guard.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, moto_body};

#[tokio::test]
async fn test_yard_with_motos_is_kept_until_emptied() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    let moto = app
        .create("/api/motos", moto_body("ABC1D23", "CHASSI1", refs))
        .await;
    let yard_path = format!("/api/patios/{}", refs.1);

    let refused = app.request("DELETE", &yard_path, None).await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        refused.body,
        json!("Não é possível remover pátio com motos associadas.")
    );
    assert_eq!(app.request("GET", &yard_path, None).await.status, StatusCode::OK);

    let removed = app
        .request("DELETE", &format!("/api/motos/{moto}"), None)
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let deleted = app.request("DELETE", &yard_path, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(
        app.request("GET", &yard_path, None).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_yard_name_is_required() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/patios", Some(json!({ "nome": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!("Nome obrigatório."));
}

#[tokio::test]
async fn test_ids_are_sequential_from_max() {
    let app = TestApp::new();
    for nome in ["A", "B", "C"] {
        app.create("/api/patios", json!({ "nome": nome })).await;
    }

    // removing the highest id lets it be handed out again
    app.request("DELETE", "/api/patios/3", None).await;
    let next = app.create("/api/patios", json!({ "nome": "D" })).await;
    assert_eq!(next, 3);
}

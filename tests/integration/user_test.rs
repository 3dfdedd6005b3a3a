//! User endpoints.

use axum::http::StatusCode;
use serde_json::json;

use mottu_auth::PasswordHasher;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_user_responses_never_carry_the_password() {
    let app = TestApp::new();

    let created = app
        .request(
            "POST",
            "/api/usuarios",
            Some(json!({ "usuario": "admin", "senha": "admin@123" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body, json!({ "id": 1, "usuario": "admin" }));

    let listed = app.request("GET", "/api/usuarios", None).await;
    assert_eq!(listed.body["items"], json!([{ "id": 1, "usuario": "admin" }]));

    // the stored hash verifies against the submitted password
    let stored = app
        .store
        .repositories()
        .users
        .find_by_id(1)
        .await
        .unwrap()
        .expect("user row");
    let hasher = PasswordHasher::new();
    assert!(hasher.verify("admin@123", &stored.senha_hash).unwrap());
    assert!(!hasher.verify("wrong", &stored.senha_hash).unwrap());
}

#[tokio::test]
async fn test_duplicate_usernames_are_rejected() {
    let app = TestApp::new();
    app.create("/api/usuarios", json!({ "usuario": "admin", "senha": "1234" }))
        .await;
    app.create("/api/usuarios", json!({ "usuario": "operador", "senha": "1234" }))
        .await;

    let duplicate = app
        .request(
            "POST",
            "/api/usuarios",
            Some(json!({ "usuario": "admin", "senha": "5678" })),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.body, json!("Usuário já existe."));

    let rename = app
        .request(
            "PUT",
            "/api/usuarios/2",
            Some(json!({ "usuario": "admin", "senha": "5678" })),
        )
        .await;
    assert_eq!(rename.status, StatusCode::BAD_REQUEST);
    assert_eq!(rename.body, json!("Já existe outro usuário com esse nome."));

    // keeping one's own name is fine
    let keep = app
        .request(
            "PUT",
            "/api/usuarios/2",
            Some(json!({ "usuario": "operador", "senha": "5678" })),
        )
        .await;
    assert_eq!(keep.status, StatusCode::OK);
}

#[tokio::test]
async fn test_short_username_fails_field_validation() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/usuarios",
            Some(json!({ "usuario": "ab", "senha": "1234" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!("Usuário deve ter entre 3 e 50 caracteres.")
    );
}

//! Moto endpoints: referential checks, joins and the plate filter.

use axum::http::StatusCode;
use serde_json::json;

use mottu_core::types::FilterField;

use crate::helpers::{TestApp, moto_body};

#[tokio::test]
async fn test_create_and_read_joined_moto() {
    let app = TestApp::new();
    let refs = app.create_references().await;

    let created = app
        .request("POST", "/api/motos", Some(moto_body("ABC1D23", "CHASSI1", refs)))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.headers["location"], "/api/motos/1");
    assert_eq!(created.body["placa"], "ABC1D23");
    assert_eq!(created.body["zonaId"], refs.0);
    assert!(created.body["qrCode"].is_null());

    let fetched = app.request("GET", "/api/motos/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["dataEntrada"], "2025-03-01T08:30:00Z");
    assert_eq!(fetched.body["zona"]["letra"], "N");
    assert_eq!(fetched.body["patio"]["nome"], "Pátio A");
    assert_eq!(fetched.body["status"]["nome"], "OK");
}

#[tokio::test]
async fn test_duplicate_plate_is_rejected_without_insert() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    app.create("/api/motos", moto_body("ABC1D23", "CHASSI1", refs))
        .await;

    let duplicate = app
        .request("POST", "/api/motos", Some(moto_body("ABC1D23", "CHASSI2", refs)))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.body, json!("Placa já cadastrada."));

    let duplicate_chassis = app
        .request("POST", "/api/motos", Some(moto_body("XYZ9K88", "CHASSI1", refs)))
        .await;
    assert_eq!(duplicate_chassis.body, json!("Chassi já cadastrado."));

    let count = app.store.repositories().motos.count(&[]).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_references_are_checked_in_order() {
    let app = TestApp::new();
    let refs = app.create_references().await;

    let cases = [
        ((99, 99, 99), "ZonaId inválido."),
        ((refs.0, 99, 99), "PatioId inválido."),
        ((refs.0, refs.1, 99), "StatusId inválido."),
    ];
    for (bad, message) in cases {
        let response = app
            .request("POST", "/api/motos", Some(moto_body("ABC1D23", "CHASSI1", bad)))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!(message));
    }
}

#[tokio::test]
async fn test_update_may_keep_own_plate() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    app.create("/api/motos", moto_body("ABC1D23", "CHASSI1", refs))
        .await;
    app.create("/api/motos", moto_body("EFG4H56", "CHASSI2", refs))
        .await;

    let mut body = moto_body("ABC1D23", "CHASSI1", refs);
    body["observacoes"] = json!("Revisada");
    let same = app.request("PUT", "/api/motos/1", Some(body)).await;
    assert_eq!(same.status, StatusCode::OK);
    assert_eq!(same.body["observacoes"], "Revisada");

    let taken = app
        .request("PUT", "/api/motos/1", Some(moto_body("EFG4H56", "CHASSI1", refs)))
        .await;
    assert_eq!(taken.status, StatusCode::BAD_REQUEST);
    assert_eq!(taken.body, json!("Placa já cadastrada."));

    let stored = app
        .store
        .repositories()
        .motos
        .find_page(&[FilterField::eq("placa", "ABC1D23")], &Default::default())
        .await
        .unwrap();
    assert_eq!(stored.total_count, 1);
}

#[tokio::test]
async fn test_plate_filter_is_case_insensitive_and_kept_in_links() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    for (i, placa) in ["ABC1D23", "ABC9Z99", "EFG4H56"].iter().enumerate() {
        app.create("/api/motos", moto_body(placa, &format!("CHASSI{i}"), refs))
            .await;
    }

    let response = app
        .send(
            "GET",
            "/api/motos?placa=abc&pageSize=1",
            String::new(),
            &[("host", "frota.local")],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalCount"], 2);
    assert_eq!(response.body["items"][0]["placa"], "ABC1D23");
    assert_eq!(response.body["items"][0]["zona"]["nome"], "Norte");
    assert_eq!(
        response.link("next").as_deref(),
        Some("http://frota.local/api/motos?page=2&pageSize=1&placa=abc")
    );
}

#[tokio::test]
async fn test_invalid_timestamp_is_bad_request() {
    let app = TestApp::new();
    let refs = app.create_references().await;
    let mut body = moto_body("ABC1D23", "CHASSI1", refs);
    body["dataEntrada"] = json!("ontem");

    let response = app.request("POST", "/api/motos", Some(body)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

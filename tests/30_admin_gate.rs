mod common;

use std::sync::Arc;

use axum::http::{Method, Request, StatusCode};
use eco_farm_api::testing::MockGateway;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn missing_header_is_401_and_handler_never_runs() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/admin/faqs",
        Some(json!({"question": "q", "answer": "a"})),
        false,
    )
    .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["success"], false);
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn wrong_marker_is_refused() {
    let gateway = Arc::new(MockGateway::new());
    let request = Request::builder()
        .uri("/api/admin/farmers")
        .header(common::ADMIN_HEADER, "yes")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = common::router(gateway.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn marker_grants_access() {
    let gateway = Arc::new(MockGateway::new().on_query("FROM farmers", vec![json!({"id": 1, "name": "A"})]));
    let res = common::admin_get(common::router(gateway.clone()), "/api/admin/farmers").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 1);
    // Stored credentials are never selected
    assert!(!gateway.statements()[0].sql.contains("password"));
}

#[tokio::test]
async fn every_admin_surface_is_gated() {
    for uri in [
        "/api/admin/faqs",
        "/api/admin/alerts",
        "/api/admin/crop-calendar",
        "/api/admin/knowledge-base",
        "/api/admin/settings",
        "/api/admin/farmers",
        "/api/admin/analytics",
    ] {
        let res = common::get(common::router(Arc::new(MockGateway::new())), uri).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

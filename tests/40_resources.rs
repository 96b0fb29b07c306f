mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use eco_farm_api::testing::{MockFailure, MockGateway};
use serde_json::{json, Value};

#[tokio::test]
async fn crops_bind_every_filter_even_when_absent() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::get(common::router(gateway.clone()), "/api/crops?soilType=Loamy").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!([]));

    let stmt = &gateway.statements()[0];
    assert_eq!(
        stmt.sql,
        "SELECT id, soil_type, temperature, rainfall, recommended_crop, crop_details FROM crop_recommendations \
         WHERE ($1::text IS NULL OR soil_type = $2::text) \
         AND ($3::float8 IS NULL OR temperature <= $4::float8) \
         AND ($5::float8 IS NULL OR rainfall <= $6::float8) \
         ORDER BY temperature DESC, rainfall DESC LIMIT 5"
    );
    assert_eq!(
        stmt.params,
        vec![json!("Loamy"), json!("Loamy"), Value::Null, Value::Null, Value::Null, Value::Null]
    );
}

#[tokio::test]
async fn crops_reject_non_numeric_temperature() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::get(common::router(gateway.clone()), "/api/crops?temperature=warm").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn fertilizers_append_only_present_filters() {
    let gateway = Arc::new(MockGateway::new());
    common::get(common::router(gateway.clone()), "/api/fertilizers?cropType=Rice&soilType=").await;

    let stmt = &gateway.statements()[0];
    assert!(stmt.sql.contains("WHERE crop_type = $1 ORDER BY effectiveness DESC LIMIT 5"), "{}", stmt.sql);
    assert_eq!(stmt.params, vec![json!("Rice")]);
}

#[tokio::test]
async fn lookup_lists_are_flat_arrays() {
    let gateway = Arc::new(MockGateway::new().on_query(
        "DISTINCT soil_type",
        vec![json!({"soil_type": "Clay"}), json!({"soil_type": "Sandy"})],
    ));
    let res = common::get(common::router(gateway), "/api/soil-types").await;
    assert_eq!(res.body, json!(["Clay", "Sandy"]));
}

#[tokio::test]
async fn yield_record_create_returns_201_with_id() {
    let gateway = Arc::new(MockGateway::new().on_execute("INSERT INTO yield_records", 1, Some(7)));
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/yield-records",
        Some(json!({
            "cropType": "Rice",
            "plantingDate": "2024-06-01",
            "harvestDate": "2024-10-15",
            "yieldAmount": 1800
        })),
        false,
    )
    .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, json!({"success": true, "message": "Yield record created", "id": 7}));
    let params = &gateway.statements()[0].params;
    assert!(params.contains(&json!("kg")));
}

#[tokio::test]
async fn yield_record_validation_lists_missing_fields() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/yield-records",
        Some(json!({"cropType": "Rice"})),
        false,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Missing required fields: plantingDate, harvestDate, yieldAmount");
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn yield_amount_accepts_numeric_text() {
    let gateway = Arc::new(MockGateway::new().on_execute("INSERT INTO yield_records", 1, Some(8)));
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/yield-records",
        Some(json!({
            "cropType": "Maize",
            "plantingDate": "2024-03-01",
            "harvestDate": "2024-07-20",
            "yieldAmount": "1800"
        })),
        false,
    )
    .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert!(gateway.statements()[0].params.contains(&json!(1800.0)));
}

#[tokio::test]
async fn yield_amount_rejects_words() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/yield-records",
        Some(json!({
            "cropType": "Maize",
            "plantingDate": "2024-03-01",
            "harvestDate": "2024-07-20",
            "yieldAmount": "plenty"
        })),
        false,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, json!({"success": false, "error": "yieldAmount must be a number", "code": "VALIDATION_ERROR"}));
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn yield_records_by_crop_path() {
    let gateway = Arc::new(MockGateway::new());
    common::get(common::router(gateway.clone()), "/api/yield-records/crop/Wheat").await;
    let stmt = &gateway.statements()[0];
    assert_eq!(
        stmt.sql,
        "SELECT * FROM yield_records WHERE crop_type = $1 ORDER BY harvest_date DESC, id DESC LIMIT 100"
    );
    assert_eq!(stmt.params, vec![json!("Wheat")]);
}

#[tokio::test]
async fn delete_of_missing_row_still_succeeds() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::send(common::router(gateway), Method::DELETE, "/api/yield-records/999", None, false).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["affected"], 0);
}

#[tokio::test]
async fn get_by_id_is_404_when_absent() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::get(common::router(gateway), "/api/faqs/5").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::get(common::router(gateway.clone()), "/api/alerts/abc").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Invalid id: abc");
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn public_faqs_are_active_only() {
    let gateway = Arc::new(MockGateway::new());
    common::get(common::router(gateway.clone()), "/api/faqs?category=soil").await;
    let stmt = &gateway.statements()[0];
    assert_eq!(
        stmt.sql,
        "SELECT * FROM faqs WHERE status = $1 AND category = $2 ORDER BY category ASC, id ASC LIMIT 50"
    );
    assert_eq!(stmt.params, vec![json!("active"), json!("soil")]);
}

#[tokio::test]
async fn repeated_query_parameter_is_a_json_error() {
    let gateway = Arc::new(MockGateway::new());
    let res = common::get(common::router(gateway.clone()), "/api/faqs?category=a&category=b").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["success"], false);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
    assert!(res.body["error"].is_string());
    assert!(gateway.statements().is_empty());
}

#[tokio::test]
async fn calendar_season_matches_either_column() {
    let gateway = Arc::new(MockGateway::new());
    common::get(common::router(gateway.clone()), "/api/crop-calendar?season=Kharif").await;
    let stmt = &gateway.statements()[0];
    assert!(stmt
        .sql
        .contains("(planting_season = $1 OR harvesting_season = $1)"));
    assert!(stmt.sql.ends_with("ORDER BY crop_name ASC LIMIT 100"));
}

#[tokio::test]
async fn knowledge_base_category_all_is_no_filter() {
    let gateway = Arc::new(MockGateway::new());
    common::get(common::router(gateway.clone()), "/api/knowledge-base?category=all").await;
    let stmt = &gateway.statements()[0];
    assert_eq!(stmt.sql, "SELECT * FROM knowledge_base ORDER BY created_at DESC, id DESC LIMIT 50");
}

#[tokio::test]
async fn admin_alert_update_reports_affected_rows() {
    let gateway = Arc::new(MockGateway::new().on_execute("UPDATE alerts", 0, None));
    let res = common::send(
        common::router(gateway.clone()),
        Method::PUT,
        "/api/admin/alerts/77",
        Some(json!({"title": "t", "message": "m", "type": "warning", "status": "read"})),
        true,
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["affected"], 0);
    let stmt = &gateway.statements()[0];
    assert_eq!(stmt.sql, "UPDATE alerts SET title = $1, message = $2, type = $3, status = $4 WHERE id = $5");
    assert_eq!(stmt.params[4], json!(77));
}

#[tokio::test]
async fn admin_faq_create_defaults_category_and_status() {
    let gateway = Arc::new(MockGateway::new().on_execute("INSERT INTO faqs", 1, Some(12)));
    let res = common::send(
        common::router(gateway.clone()),
        Method::POST,
        "/api/admin/faqs",
        Some(json!({"question": "When to sow?", "answer": "After the first rains"})),
        true,
    )
    .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["id"], 12);
    assert_eq!(
        gateway.statements()[0].params,
        vec![json!("When to sow?"), json!("After the first rains"), json!("general"), json!("active")]
    );
}

#[tokio::test]
async fn admin_article_update_touches_updated_at() {
    let gateway = Arc::new(MockGateway::new().on_execute("UPDATE knowledge_base", 1, None));
    let res = common::send(
        common::router(gateway.clone()),
        Method::PUT,
        "/api/admin/knowledge-base/4",
        Some(json!({"title": "t", "content": "c", "category": "soil"})),
        true,
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(gateway.statements()[0].sql.contains("updated_at = NOW() WHERE id = $6"));
}

#[tokio::test]
async fn admin_setting_key_clash_is_conflict() {
    let gateway = Arc::new(
        MockGateway::new().fail_on("UPDATE settings", MockFailure::UniqueViolation("settings_setting_key_key")),
    );
    let res = common::send(
        common::router(gateway),
        Method::PUT,
        "/api/admin/settings/2",
        Some(json!({"settingKey": "site_name", "settingValue": "Eco Farm"})),
        true,
    )
    .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "CONFLICT");
}

#[tokio::test]
async fn database_errors_are_opaque() {
    let gateway = Arc::new(
        MockGateway::new().fail_on("FROM alerts", MockFailure::Query("relation \"alerts\" does not exist")),
    );
    let res = common::get(common::router(gateway), "/api/alerts").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["error"], "Database error");
}

#[tokio::test]
async fn pool_timeout_is_503() {
    let gateway = Arc::new(MockGateway::new().fail_on("FROM faqs", MockFailure::Timeout));
    let res = common::get(common::router(gateway), "/api/faqs").await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn admin_settings_create_and_list_order() {
    let gateway = Arc::new(MockGateway::new().on_execute("INSERT INTO settings", 1, Some(3)));
    let router = common::router(gateway.clone());

    let res = common::send(
        router.clone(),
        Method::POST,
        "/api/admin/settings",
        Some(json!({"settingKey": "support_phone", "settingValue": "1800-000"})),
        true,
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["id"], 3);

    common::admin_get(router, "/api/admin/settings?category=contact").await;
    let list = gateway.statements_matching("SELECT * FROM settings");
    assert_eq!(
        list[0].sql,
        "SELECT * FROM settings WHERE category = $1 ORDER BY category ASC, setting_key ASC LIMIT 100"
    );
}

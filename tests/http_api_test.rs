mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::Value;
use tower::ServiceExt;

use distributor_api::{app_router, config::AppConfig, AppState};

use common::*;

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_owned(),
        host: "127.0.0.1".to_owned(),
        port: 0,
        environment: "test".to_owned(),
        log_level: "debug".to_owned(),
        log_json: false,
        db_max_connections: 1,
        db_min_connections: 1,
        db_connect_timeout_secs: 5,
        db_acquire_timeout_secs: 5,
        db_idle_timeout_secs: 60,
    }
}

async fn test_app() -> (Router, sea_orm::DatabaseConnection) {
    let db = setup_db().await;
    let state = AppState::new(Arc::new(db.clone()), test_config());
    (app_router(state), db)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("parse json body");
    (status, json)
}

#[tokio::test]
async fn root_banner_and_health_respond() {
    let (app, _db) = test_app().await;

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Distributor catalog available");

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn product_listing_applies_query_filters() {
    let (app, db) = test_app().await;
    let s = insert_supplier(&db, "Andes Foods").await;
    insert_product(&db, "Rice 5kg", Some("RICE-5"), Some(s.id), None, true).await;
    insert_product(&db, "Beans 1kg", Some("BEANS-1"), Some(s.id), None, false).await;

    let uri = format!("/products/?supplier_id={}&active_only=true", s.id);
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().expect("array body");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Rice 5kg");
    assert_eq!(products[0]["supplier"]["name"], "Andes Foods");
}

#[tokio::test]
async fn listing_with_no_matches_returns_empty_array() {
    let (app, _db) = test_app().await;
    let (status, body) = get_json(&app, "/orders/?status=delivered").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn missing_resources_map_to_404_with_error_body() {
    let (app, _db) = test_app().await;

    let (status, body) = get_json(&app, "/orders/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Order 9999 not found");

    let (status, _) = get_json(&app, "/suppliers/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_detail_round_trips_through_http() {
    let (app, db) = test_app().await;
    let customer = insert_customer(&db, "Bodega Central").await;
    let product = insert_product(&db, "Rice 5kg", Some("RICE-5"), None, None, true).await;
    let order = insert_order(&db, customer.id, date(2024, 4, 2), "pending", dec!(37.50)).await;
    insert_order_item(&db, order.id, product.id, 3, dec!(12.50)).await;

    let (status, body) = get_json(&app, &format!("/orders/{}", order.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer"]["name"], "Bodega Central");
    assert_eq!(body["items"][0]["product"]["sku"], "RICE-5");
    // sqlite round-trips decimals through REAL, so compare numerically
    let total: rust_decimal::Decimal = body["total_amount"]
        .as_str()
        .expect("total_amount is serialized as a string")
        .parse()
        .unwrap();
    assert_eq!(total, dec!(37.50));
    assert!(body.get("shipments").is_none());
}

#[tokio::test]
async fn inventory_listing_filters_by_warehouse() {
    let (app, db) = test_app().await;
    let product = insert_product(&db, "Rice 5kg", None, None, None, true).await;
    let w1 = insert_warehouse(&db, "North", Some("Trujillo")).await;
    let w2 = insert_warehouse(&db, "South", Some("Arequipa")).await;
    insert_inventory(&db, product.id, w1.id, 40).await;
    insert_inventory(&db, product.id, w2.id, 10).await;

    let (status, body) = get_json(&app, &format!("/inventory/?warehouse_id={}", w1.id)).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().expect("array body");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["warehouse"]["name"], "North");
    assert_eq!(records[0]["quantity_on_hand"], 40);
}

//! Distributor Catalog API Library
//!
//! Read-only catalog of a wholesale food distributor: suppliers, categories,
//! products, warehouses, inventory, customers, orders and shipments.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod services;
pub mod views;

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

/// Shared application state: the connection pool and the loaded config.
/// Handlers borrow the pool per request; nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: config::AppConfig) -> Self {
        Self { db, config }
    }
}

/// Assembles the full application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/suppliers", handlers::suppliers::supplier_routes())
        .nest("/categories", handlers::categories::category_routes())
        .nest("/products", handlers::products::product_routes())
        .nest("/warehouses", handlers::warehouses::warehouse_routes())
        .nest("/inventory", handlers::inventory::inventory_routes())
        .nest("/customers", handlers::customers::customer_routes())
        .nest("/orders", handlers::orders::order_routes())
        .nest("/shipments", handlers::shipments::shipment_routes())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Distributor catalog available" }))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let database_up = db::ping(&state.db).await.is_ok();
    Json(json!({
        "status": if database_up { "ok" } else { "degraded" },
        "database": if database_up { "up" } else { "down" },
    }))
}

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::warehouses;
use crate::AppState;

async fn list_warehouses(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let warehouses = warehouses::list_warehouses(&state.db).await?;
    Ok(Json(warehouses))
}

async fn get_warehouse(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let warehouse = warehouses::get_warehouse(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Warehouse {id} not found")))?;
    Ok(Json(warehouse))
}

pub fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_warehouses))
        .route("/:id", get(get_warehouse))
}

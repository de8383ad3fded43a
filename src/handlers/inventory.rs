use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::inventory::{self, InventoryFilter};
use crate::AppState;

async fn list_inventory(
    State(state): State<AppState>,
    Query(filter): Query<InventoryFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let records = inventory::list_inventory(&state.db, &filter).await?;
    Ok(Json(records))
}

pub fn inventory_routes() -> Router<AppState> {
    Router::new().route("/", get(list_inventory))
}

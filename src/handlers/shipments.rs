use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::shipments::{self, ShipmentFilter};
use crate::AppState;

async fn list_shipments(
    State(state): State<AppState>,
    Query(filter): Query<ShipmentFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let shipments = shipments::list_shipments(&state.db, &filter).await?;
    Ok(Json(shipments))
}

async fn get_shipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let shipment = shipments::get_shipment(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Shipment {id} not found")))?;
    Ok(Json(shipment))
}

pub fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shipments))
        .route("/:id", get(get_shipment))
}

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::suppliers;
use crate::AppState;

async fn list_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let suppliers = suppliers::list_suppliers(&state.db).await?;
    Ok(Json(suppliers))
}

async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let supplier = suppliers::get_supplier(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Supplier {id} not found")))?;
    Ok(Json(supplier))
}

pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/:id", get(get_supplier))
}

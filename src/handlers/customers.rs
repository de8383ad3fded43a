use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::customers;
use crate::AppState;

async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let customers = customers::list_customers(&state.db).await?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = customers::get_customer(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Customer {id} not found")))?;
    Ok(Json(customer))
}

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/:id", get(get_customer))
}

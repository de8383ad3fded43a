use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::products::{self, ProductFilter};
use crate::AppState;

async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, ServiceError> {
    let products = products::list_products(&state.db, &filter).await?;
    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = products::get_product(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;
    Ok(Json(product))
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

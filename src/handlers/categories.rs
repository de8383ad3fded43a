use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::errors::ServiceError;
use crate::services::categories;
use crate::AppState;

async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let categories = categories::list_categories(&state.db).await?;
    Ok(Json(categories))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let category = categories::get_category(&state.db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Category {id} not found")))?;
    Ok(Json(category))
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
}

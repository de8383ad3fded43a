use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::entities::category;
use crate::errors::ServiceError;
use crate::views::CategoryView;

/// Lists every category, name ascending.
#[instrument(skip(db))]
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<CategoryView>, ServiceError> {
    let categories = category::Entity::find()
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;
    Ok(categories.iter().map(CategoryView::from).collect())
}

#[instrument(skip(db))]
pub async fn get_category(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<CategoryView>, ServiceError> {
    let category = category::Entity::find_by_id(id).one(db).await?;
    Ok(category.as_ref().map(CategoryView::from))
}

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::entities::warehouse;
use crate::errors::ServiceError;
use crate::views::WarehouseView;

/// Lists every warehouse, name ascending.
#[instrument(skip(db))]
pub async fn list_warehouses(db: &DatabaseConnection) -> Result<Vec<WarehouseView>, ServiceError> {
    let warehouses = warehouse::Entity::find()
        .order_by_asc(warehouse::Column::Name)
        .all(db)
        .await?;
    Ok(warehouses.iter().map(WarehouseView::from).collect())
}

#[instrument(skip(db))]
pub async fn get_warehouse(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<WarehouseView>, ServiceError> {
    let warehouse = warehouse::Entity::find_by_id(id).one(db).await?;
    Ok(warehouse.as_ref().map(WarehouseView::from))
}

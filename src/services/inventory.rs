use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use tracing::instrument;

use crate::entities::{inventory, product, warehouse};
use crate::errors::ServiceError;
use crate::views::InventoryView;

/// Optional constraints for inventory listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryFilter {
    pub warehouse_id: Option<i32>,
    pub product_id: Option<i32>,
}

impl InventoryFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(warehouse_id) = self.warehouse_id {
            condition = condition.add(inventory::Column::WarehouseId.eq(warehouse_id));
        }
        if let Some(product_id) = self.product_id {
            condition = condition.add(inventory::Column::ProductId.eq(product_id));
        }
        condition
    }
}

/// Fetches matching inventory rows in insertion (id) order. Duplicate
/// (product, warehouse) records come back as distinct rows.
pub async fn find_inventory(
    db: &DatabaseConnection,
    filter: &InventoryFilter,
) -> Result<Vec<inventory::Model>, ServiceError> {
    let records = inventory::Entity::find()
        .filter(filter.condition())
        .order_by_asc(inventory::Column::Id)
        .all(db)
        .await?;
    Ok(records)
}

/// Lists matching inventory records with product and warehouse summaries.
#[instrument(skip(db))]
pub async fn list_inventory(
    db: &DatabaseConnection,
    filter: &InventoryFilter,
) -> Result<Vec<InventoryView>, ServiceError> {
    let records = find_inventory(db, filter).await?;
    let products = records.load_one(product::Entity, db).await?;
    let warehouses = records.load_one(warehouse::Entity, db).await?;

    records
        .iter()
        .zip(products.iter())
        .zip(warehouses.iter())
        .map(|((record, product), warehouse)| {
            let product = product.as_ref().ok_or_else(|| {
                ServiceError::Internal(format!(
                    "inventory record {} references missing product {}",
                    record.id, record.product_id
                ))
            })?;
            let warehouse = warehouse.as_ref().ok_or_else(|| {
                ServiceError::Internal(format!(
                    "inventory record {} references missing warehouse {}",
                    record.id, record.warehouse_id
                ))
            })?;
            Ok(InventoryView::new(record, product, warehouse))
        })
        .collect()
}

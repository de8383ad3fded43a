use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::entities::supplier;
use crate::errors::ServiceError;
use crate::views::SupplierView;

/// Lists every supplier, name ascending.
#[instrument(skip(db))]
pub async fn list_suppliers(db: &DatabaseConnection) -> Result<Vec<SupplierView>, ServiceError> {
    let suppliers = supplier::Entity::find()
        .order_by_asc(supplier::Column::Name)
        .all(db)
        .await?;
    Ok(suppliers.iter().map(SupplierView::from).collect())
}

#[instrument(skip(db))]
pub async fn get_supplier(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<SupplierView>, ServiceError> {
    let supplier = supplier::Entity::find_by_id(id).one(db).await?;
    Ok(supplier.as_ref().map(SupplierView::from))
}

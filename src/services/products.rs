use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use serde::Deserialize;
use tracing::instrument;

use crate::entities::{category, product, supplier};
use crate::errors::ServiceError;
use crate::views::ProductView;

/// Optional constraints for product listings. Omitted fields apply no
/// constraint; supplied fields combine into a single AND predicate, so the
/// outcome does not depend on the order they are applied in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub active_only: bool,
}

impl ProductFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(supplier_id) = self.supplier_id {
            condition = condition.add(product::Column::SupplierId.eq(supplier_id));
        }
        if let Some(category_id) = self.category_id {
            condition = condition.add(product::Column::CategoryId.eq(category_id));
        }
        if self.active_only {
            condition = condition.add(product::Column::IsActive.eq(product::ACTIVE));
        }
        condition
    }
}

/// Fetches the matching product rows, name ascending.
pub async fn find_products(
    db: &DatabaseConnection,
    filter: &ProductFilter,
) -> Result<Vec<product::Model>, ServiceError> {
    let products = product::Entity::find()
        .filter(filter.condition())
        .order_by_asc(product::Column::Name)
        .all(db)
        .await?;
    Ok(products)
}

/// Lists matching products with their supplier and category summaries.
#[instrument(skip(db))]
pub async fn list_products(
    db: &DatabaseConnection,
    filter: &ProductFilter,
) -> Result<Vec<ProductView>, ServiceError> {
    let products = find_products(db, filter).await?;
    let suppliers = products.load_one(supplier::Entity, db).await?;
    let categories = products.load_one(category::Entity, db).await?;

    Ok(products
        .iter()
        .zip(suppliers.iter())
        .zip(categories.iter())
        .map(|((product, supplier), category)| {
            ProductView::new(product, supplier.as_ref(), category.as_ref())
        })
        .collect())
}

#[instrument(skip(db))]
pub async fn get_product(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<ProductView>, ServiceError> {
    let Some(product) = product::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let supplier = product.find_related(supplier::Entity).one(db).await?;
    let category = product.find_related(category::Entity).one(db).await?;
    Ok(Some(ProductView::new(
        &product,
        supplier.as_ref(),
        category.as_ref(),
    )))
}

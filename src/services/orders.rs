use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use serde::Deserialize;
use tracing::instrument;

use crate::entities::{customer, order, order_item, product};
use crate::errors::ServiceError;
use crate::views::{OrderItemView, OrderView};

/// Optional constraints for order listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    /// Exact-match status, e.g. "pending"
    pub status: Option<String>,
}

impl OrderFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(status) = &self.status {
            condition = condition.add(order::Column::Status.eq(status.clone()));
        }
        condition
    }
}

/// Fetches matching orders, most recent order_date first.
pub async fn find_orders(
    db: &DatabaseConnection,
    filter: &OrderFilter,
) -> Result<Vec<order::Model>, ServiceError> {
    let orders = order::Entity::find()
        .filter(filter.condition())
        .order_by_desc(order::Column::OrderDate)
        .all(db)
        .await?;
    Ok(orders)
}

/// Lists matching orders with customer summaries and projected line items.
#[instrument(skip(db))]
pub async fn list_orders(
    db: &DatabaseConnection,
    filter: &OrderFilter,
) -> Result<Vec<OrderView>, ServiceError> {
    let orders = find_orders(db, filter).await?;
    let customers = orders.load_one(customer::Entity, db).await?;
    let items_per_order = orders.load_many(order_item::Entity, db).await?;

    let products =
        products_by_id(db, items_per_order.iter().flatten().map(|i| i.product_id)).await?;

    orders
        .iter()
        .zip(customers.iter())
        .zip(items_per_order.iter())
        .map(|((order, customer), items)| {
            let customer = customer.as_ref().ok_or_else(|| missing_customer(order))?;
            let items = project_items(items, &products)?;
            Ok(OrderView::new(order, customer, items))
        })
        .collect()
}

#[instrument(skip(db))]
pub async fn get_order(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<OrderView>, ServiceError> {
    let Some(order) = order::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let customer = order
        .find_related(customer::Entity)
        .one(db)
        .await?
        .ok_or_else(|| missing_customer(&order))?;
    let items = order.find_related(order_item::Entity).all(db).await?;
    let products = products_by_id(db, items.iter().map(|i| i.product_id)).await?;
    let items = project_items(&items, &products)?;

    Ok(Some(OrderView::new(&order, &customer, items)))
}

/// Batch-resolves the products behind a set of line items.
async fn products_by_id(
    db: &DatabaseConnection,
    ids: impl Iterator<Item = i32>,
) -> Result<HashMap<i32, product::Model>, ServiceError> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let products = product::Entity::find()
        .filter(product::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(products.into_iter().map(|p| (p.id, p)).collect())
}

fn project_items(
    items: &[order_item::Model],
    products: &HashMap<i32, product::Model>,
) -> Result<Vec<OrderItemView>, ServiceError> {
    items
        .iter()
        .map(|item| {
            let product = products.get(&item.product_id).ok_or_else(|| {
                ServiceError::Internal(format!(
                    "order item {} references missing product {}",
                    item.id, item.product_id
                ))
            })?;
            Ok(OrderItemView::new(item, product))
        })
        .collect()
}

fn missing_customer(order: &order::Model) -> ServiceError {
    ServiceError::Internal(format!(
        "order {} references missing customer {}",
        order.id, order.customer_id
    ))
}

use std::collections::HashMap;

use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, Order as SortOrder, QueryFilter, QueryOrder,
};
use serde::Deserialize;
use tracing::instrument;

use crate::entities::{customer, order, shipment, warehouse};
use crate::errors::ServiceError;
use crate::views::{OrderSummary, ShipmentView};

/// Optional constraints for shipment listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipmentFilter {
    /// Exact-match delivery status, e.g. "in transit"
    pub delivery_status: Option<String>,
}

impl ShipmentFilter {
    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(status) = &self.delivery_status {
            condition = condition.add(shipment::Column::DeliveryStatus.eq(status.clone()));
        }
        condition
    }
}

/// Fetches matching shipments, most recently shipped first; records that
/// have not shipped yet (no `shipped_at`) sort last.
pub async fn find_shipments(
    db: &DatabaseConnection,
    filter: &ShipmentFilter,
) -> Result<Vec<shipment::Model>, ServiceError> {
    let shipments = shipment::Entity::find()
        .filter(filter.condition())
        .order_by_with_nulls(
            shipment::Column::ShippedAt,
            SortOrder::Desc,
            NullOrdering::Last,
        )
        .all(db)
        .await?;
    Ok(shipments)
}

/// Lists matching shipments, each with its order summary (carrying the
/// customer summary) and the dispatching warehouse when one is assigned.
#[instrument(skip(db))]
pub async fn list_shipments(
    db: &DatabaseConnection,
    filter: &ShipmentFilter,
) -> Result<Vec<ShipmentView>, ServiceError> {
    let shipments = find_shipments(db, filter).await?;
    let orders = shipments.load_one(order::Entity, db).await?;
    let warehouses = shipments.load_one(warehouse::Entity, db).await?;

    let customers = customers_by_id(
        db,
        orders.iter().flatten().map(|order| order.customer_id),
    )
    .await?;

    shipments
        .iter()
        .zip(orders.iter())
        .zip(warehouses.iter())
        .map(|((shipment, order), warehouse)| {
            let order = order.as_ref().ok_or_else(|| missing_order(shipment))?;
            let customer = customers
                .get(&order.customer_id)
                .ok_or_else(|| missing_customer(order))?;
            Ok(ShipmentView::new(
                shipment,
                OrderSummary::new(order, customer),
                warehouse.as_ref(),
            ))
        })
        .collect()
}

#[instrument(skip(db))]
pub async fn get_shipment(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<ShipmentView>, ServiceError> {
    let Some(shipment) = shipment::Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let order = shipment
        .find_related(order::Entity)
        .one(db)
        .await?
        .ok_or_else(|| missing_order(&shipment))?;
    let customer = order
        .find_related(customer::Entity)
        .one(db)
        .await?
        .ok_or_else(|| missing_customer(&order))?;
    let warehouse = shipment.find_related(warehouse::Entity).one(db).await?;

    Ok(Some(ShipmentView::new(
        &shipment,
        OrderSummary::new(&order, &customer),
        warehouse.as_ref(),
    )))
}

async fn customers_by_id(
    db: &DatabaseConnection,
    ids: impl Iterator<Item = i32>,
) -> Result<HashMap<i32, customer::Model>, ServiceError> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let customers = customer::Entity::find()
        .filter(customer::Column::Id.is_in(ids))
        .all(db)
        .await?;
    Ok(customers.into_iter().map(|c| (c.id, c)).collect())
}

fn missing_order(shipment: &shipment::Model) -> ServiceError {
    ServiceError::Internal(format!(
        "shipment {} references missing order {}",
        shipment.id, shipment.order_id
    ))
}

fn missing_customer(order: &order::Model) -> ServiceError {
    ServiceError::Internal(format!(
        "order {} references missing customer {}",
        order.id, order.customer_id
    ))
}

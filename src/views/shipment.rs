use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{OrderSummary, WarehouseSummary};
use crate::entities::{shipment, warehouse};

/// Full shipment projection: own scalars, the order it fulfills (as a
/// summary, which itself carries the customer summary) and, when assigned,
/// the dispatching warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentView {
    pub id: i32,
    pub order: OrderSummary,
    pub warehouse: Option<WarehouseSummary>,
    pub shipped_at: Option<DateTime<Utc>>,
    pub estimated_delivery: Option<NaiveDate>,
    pub delivery_status: String,
    pub tracking_number: Option<String>,
}

impl ShipmentView {
    pub fn new(
        shipment: &shipment::Model,
        order: OrderSummary,
        warehouse: Option<&warehouse::Model>,
    ) -> Self {
        Self {
            id: shipment.id,
            order,
            warehouse: warehouse.map(WarehouseSummary::from),
            shipped_at: shipment.shipped_at,
            estimated_delivery: shipment.estimated_delivery,
            delivery_status: shipment.delivery_status.clone(),
            tracking_number: shipment.tracking_number.clone(),
        }
    }
}

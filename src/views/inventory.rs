use chrono::NaiveDate;
use serde::Serialize;

use super::{ProductSummary, WarehouseSummary};
use crate::entities::{inventory, product, warehouse};

/// Inventory projection: the record's own quantities plus summaries of the
/// product and warehouse it joins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub id: i32,
    pub product: ProductSummary,
    pub warehouse: WarehouseSummary,
    pub quantity_on_hand: i32,
    pub safety_stock: Option<i32>,
    pub last_restocked: Option<NaiveDate>,
}

impl InventoryView {
    pub fn new(
        record: &inventory::Model,
        product: &product::Model,
        warehouse: &warehouse::Model,
    ) -> Self {
        Self {
            id: record.id,
            product: ProductSummary::from(product),
            warehouse: WarehouseSummary::from(warehouse),
            quantity_on_hand: record.quantity_on_hand,
            safety_stock: record.safety_stock,
            last_restocked: record.last_restocked,
        }
    }
}

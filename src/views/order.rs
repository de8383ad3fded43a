use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CustomerSummary, ProductSummary};
use crate::entities::{customer, order, order_item, product};

/// Line item projection nested inside an order view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemView {
    pub id: i32,
    pub product: ProductSummary,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount: Option<Decimal>,
}

impl OrderItemView {
    pub fn new(item: &order_item::Model, product: &product::Model) -> Self {
        Self {
            id: item.id,
            product: ProductSummary::from(product),
            quantity: item.quantity,
            unit_price: item.unit_price,
            discount: item.discount,
        }
    }
}

/// Full order projection: customer summary plus one view per line item.
/// Shipments of the order are not embedded; they are reached through the
/// shipment endpoints, which nest an [`OrderSummary`] instead.
///
/// `total_amount` is reported exactly as stored; it is not reconciled against
/// the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: i32,
    pub customer: CustomerSummary,
    pub order_date: NaiveDate,
    pub required_date: Option<NaiveDate>,
    pub status: String,
    pub total_amount: Decimal,
    pub items: Vec<OrderItemView>,
}

impl OrderView {
    pub fn new(
        order: &order::Model,
        customer: &customer::Model,
        items: Vec<OrderItemView>,
    ) -> Self {
        Self {
            id: order.id,
            customer: CustomerSummary::from(customer),
            order_date: order.order_date,
            required_date: order.required_date,
            status: order.status.clone(),
            total_amount: order.total_amount,
            items,
        }
    }
}

/// Order summary used inside shipment views. Carries enough to identify the
/// order (date, status, customer) without pulling in its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: i32,
    pub order_date: NaiveDate,
    pub status: String,
    pub customer: CustomerSummary,
}

impl OrderSummary {
    pub fn new(order: &order::Model, customer: &customer::Model) -> Self {
        Self {
            id: order.id,
            order_date: order.order_date,
            status: order.status.clone(),
            customer: CustomerSummary::from(customer),
        }
    }
}

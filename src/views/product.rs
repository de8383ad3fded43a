use rust_decimal::Decimal;
use serde::Serialize;

use super::{CategorySummary, SupplierSummary};
use crate::entities::{category, product, supplier};

/// Full product projection: own scalars plus supplier and category summaries.
/// Inventory records and order items referencing the product are never
/// embedded here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub sku: Option<String>,
    pub unit: String,
    pub unit_price: Decimal,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub is_active: String,
    pub supplier: Option<SupplierSummary>,
    pub category: Option<CategorySummary>,
}

impl ProductView {
    pub fn new(
        product: &product::Model,
        supplier: Option<&supplier::Model>,
        category: Option<&category::Model>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            unit: product.unit.clone(),
            unit_price: product.unit_price,
            supplier_id: product.supplier_id,
            category_id: product.category_id,
            is_active: product.is_active.clone(),
            supplier: supplier.map(SupplierSummary::from),
            category: category.map(CategorySummary::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub sku: Option<String>,
}

impl From<&product::Model> for ProductSummary {
    fn from(model: &product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            sku: model.sku.clone(),
        }
    }
}

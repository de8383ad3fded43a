use serde::Serialize;

use crate::entities::warehouse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseView {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub manager_name: Option<String>,
}

impl From<&warehouse::Model> for WarehouseView {
    fn from(model: &warehouse::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            address: model.address.clone(),
            city: model.city.clone(),
            manager_name: model.manager_name.clone(),
        }
    }
}

/// Warehouse summary carries the city as well, since warehouses in the same
/// chain often share a name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseSummary {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
}

impl From<&warehouse::Model> for WarehouseSummary {
    fn from(model: &warehouse::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            city: model.city.clone(),
        }
    }
}

use serde::Serialize;

use crate::entities::supplier;

/// Full supplier projection. Owned products are deliberately not embedded;
/// the product view points back here instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierView {
    pub id: i32,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<&supplier::Model> for SupplierView {
    fn from(model: &supplier::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            contact_name: model.contact_name.clone(),
            phone: model.phone.clone(),
            email: model.email.clone(),
            address: model.address.clone(),
            city: model.city.clone(),
            country: model.country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierSummary {
    pub id: i32,
    pub name: String,
}

impl From<&supplier::Model> for SupplierSummary {
    fn from(model: &supplier::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

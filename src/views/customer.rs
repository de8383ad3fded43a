use serde::Serialize;

use crate::entities::customer;

/// Full customer projection; owned orders are not embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<&customer::Model> for CustomerView {
    fn from(model: &customer::Model) -> Self {
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
pub struct CustomerSummary {
    pub id: i32,
    pub name: String,
}

impl From<&customer::Model> for CustomerSummary {
    fn from(model: &customer::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

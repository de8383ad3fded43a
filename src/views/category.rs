use serde::Serialize;

use crate::entities::category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<&category::Model> for CategoryView {
    fn from(model: &category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: i32,
    pub name: String,
}

impl From<&category::Model> for CategorySummary {
    fn from(model: &category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
        }
    }
}

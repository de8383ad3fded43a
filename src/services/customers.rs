use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;

use crate::entities::customer;
use crate::errors::ServiceError;
use crate::views::CustomerView;

/// Lists every customer, name ascending.
#[instrument(skip(db))]
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<CustomerView>, ServiceError> {
    let customers = customer::Entity::find()
        .order_by_asc(customer::Column::Name)
        .all(db)
        .await?;
    Ok(customers.iter().map(CustomerView::from).collect())
}

#[instrument(skip(db))]
pub async fn get_customer(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<CustomerView>, ServiceError> {
    let customer = customer::Entity::find_by_id(id).one(db).await?;
    Ok(customer.as_ref().map(CustomerView::from))
}

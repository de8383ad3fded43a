//! HTTP handlers: thin adapters from axum extraction to the service layer.
//!
//! Each module owns the routes of one resource. Handlers map the service
//! layer's `Ok(None)` lookups to [`ServiceError::NotFound`]; everything else
//! passes through untouched.
//!
//! [`ServiceError::NotFound`]: crate::errors::ServiceError::NotFound

pub mod categories;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod shipments;
pub mod suppliers;
pub mod warehouses;

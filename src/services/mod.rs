//! Query engine: one module per entity.
//!
//! Listing functions take an optional-filter struct, combine every supplied
//! constraint into a single AND predicate and apply the entity's fixed
//! default ordering. By-id lookups return `Ok(None)` for an absent row;
//! `Err` is reserved for store failures, which always propagate verbatim.
//! Nothing here paginates or truncates a result set.
//!
//! Every function borrows the request's `DatabaseConnection` explicitly;
//! there is no shared module-level handle.

pub mod categories;
pub mod customers;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod shipments;
pub mod suppliers;
pub mod warehouses;

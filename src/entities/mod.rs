//! Entity catalog for the distributor database.
//!
//! Each module declares one table: its fields, defaults and relation edges.
//! Relationships are one-directional foreign-key columns plus declared
//! `Relation` edges; the view layer decides which direction to materialize.

pub mod category;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod order_item;
pub mod product;
pub mod shipment;
pub mod supplier;
pub mod warehouse;

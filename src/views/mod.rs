//! View shapes returned by the API.
//!
//! Every entity projects into two forms: a `*Summary` (id plus the minimal
//! identifying fields) used whenever the entity is nested inside another view,
//! and a full `*View` used at the top level. Details only ever nest
//! summaries, so a projection can never recurse back into itself: a product
//! carries its supplier summary, but a supplier view never carries products.
//!
//! All constructors are pure; relation fetching happens in the service layer.

mod category;
mod customer;
mod inventory;
mod order;
mod product;
mod shipment;
mod supplier;
mod warehouse;

pub use category::{CategorySummary, CategoryView};
pub use customer::{CustomerSummary, CustomerView};
pub use inventory::InventoryView;
pub use order::{OrderItemView, OrderSummary, OrderView};
pub use product::{ProductSummary, ProductView};
pub use shipment::ShipmentView;
pub use supplier::{SupplierSummary, SupplierView};
pub use warehouse::{WarehouseSummary, WarehouseView};

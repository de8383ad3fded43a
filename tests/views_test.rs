mod common;

use rust_decimal_macros::dec;
use serde_json::Value;

use distributor_api::services::{
    inventory::{self, InventoryFilter},
    orders, products, shipments, suppliers,
};

use common::*;

#[tokio::test]
async fn order_detail_projects_items_with_product_summaries_and_no_shipments() {
    let db = setup_db().await;
    let customer = insert_customer(&db, "Bodega Central").await;
    let rice = insert_product(&db, "Rice 5kg", Some("RICE-5"), None, None, true).await;
    let beans = insert_product(&db, "Beans 1kg", Some("BEANS-1"), None, None, true).await;

    // stored total deliberately differs from the item sum; it must be
    // reported as-is, never reconciled
    let order = insert_order(&db, customer.id, date(2024, 4, 2), "pending", dec!(500.00)).await;
    insert_order_item(&db, order.id, rice.id, 3, dec!(12.50)).await;
    insert_order_item(&db, order.id, beans.id, 10, dec!(4.20)).await;
    insert_shipment(&db, order.id, None, None, "in transit").await;

    let view = orders::get_order(&db, order.id).await.unwrap().unwrap();
    assert_eq!(view.customer.id, customer.id);
    assert_eq!(view.customer.name, "Bodega Central");
    assert_eq!(view.total_amount, dec!(500.00));
    assert_eq!(view.items.len(), 2);

    let rice_item = view
        .items
        .iter()
        .find(|i| i.product.id == rice.id)
        .expect("rice line item");
    assert_eq!(rice_item.product.name, "Rice 5kg");
    assert_eq!(rice_item.product.sku.as_deref(), Some("RICE-5"));
    assert_eq!(rice_item.quantity, 3);

    let json = serde_json::to_value(&view).unwrap();
    assert!(
        json.get("shipments").is_none(),
        "order detail must not embed shipments"
    );
}

#[tokio::test]
async fn product_detail_nests_summaries_but_no_collections() {
    let db = setup_db().await;
    let supplier = insert_supplier(&db, "Andes Foods").await;
    let category = insert_category(&db, "Grains").await;
    let product = insert_product(
        &db,
        "Rice 5kg",
        Some("RICE-5"),
        Some(supplier.id),
        Some(category.id),
        true,
    )
    .await;
    let warehouse = insert_warehouse(&db, "North", None).await;
    insert_inventory(&db, product.id, warehouse.id, 40).await;

    let view = products::get_product(&db, product.id).await.unwrap().unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["supplier"]["name"], "Andes Foods");
    assert_eq!(json["category"]["name"], "Grains");
    assert!(json.get("inventory").is_none());
    assert!(json.get("order_items").is_none());

    // nested supplier must be the summary shape, not the full view
    let nested: Vec<&String> = json["supplier"].as_object().unwrap().keys().collect();
    assert_eq!(nested, vec!["id", "name"]);
}

#[tokio::test]
async fn supplier_detail_never_embeds_its_products() {
    let db = setup_db().await;
    let supplier = insert_supplier(&db, "Andes Foods").await;
    insert_product(&db, "Rice 5kg", None, Some(supplier.id), None, true).await;

    let view = suppliers::get_supplier(&db, supplier.id).await.unwrap().unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("products").is_none());
    assert_eq!(json["name"], "Andes Foods");
}

#[tokio::test]
async fn inventory_detail_nests_product_and_warehouse_summaries() {
    let db = setup_db().await;
    let product = insert_product(&db, "Rice 5kg", Some("RICE-5"), None, None, true).await;
    let warehouse = insert_warehouse(&db, "North", Some("Trujillo")).await;
    insert_inventory(&db, product.id, warehouse.id, 40).await;

    let views = inventory::list_inventory(&db, &InventoryFilter::default())
        .await
        .unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].product.sku.as_deref(), Some("RICE-5"));
    assert_eq!(views[0].warehouse.city.as_deref(), Some("Trujillo"));
    assert_eq!(views[0].quantity_on_hand, 40);
}

#[tokio::test]
async fn shipment_detail_nests_order_summary_with_customer() {
    let db = setup_db().await;
    let customer = insert_customer(&db, "Bodega Central").await;
    let order = insert_order(&db, customer.id, date(2024, 4, 2), "pending", dec!(50.00)).await;
    let warehouse = insert_warehouse(&db, "North", Some("Trujillo")).await;

    let with_wh = insert_shipment(
        &db,
        order.id,
        Some(warehouse.id),
        Some(timestamp(2024, 4, 3, 8)),
        "delivered",
    )
    .await;
    let without_wh = insert_shipment(&db, order.id, None, None, "in transit").await;

    let view = shipments::get_shipment(&db, with_wh.id).await.unwrap().unwrap();
    assert_eq!(view.order.id, order.id);
    assert_eq!(view.order.customer.name, "Bodega Central");
    assert_eq!(view.warehouse.as_ref().unwrap().name, "North");

    // the nested order summary must not carry the order's items
    let json = serde_json::to_value(&view).unwrap();
    assert!(json["order"].get("items").is_none());

    let view = shipments::get_shipment(&db, without_wh.id).await.unwrap().unwrap();
    assert!(view.warehouse.is_none());
    assert!(view.shipped_at.is_none());
}

#[tokio::test]
async fn list_views_match_single_fetch_views() {
    let db = setup_db().await;
    let supplier = insert_supplier(&db, "Andes Foods").await;
    let product = insert_product(&db, "Rice 5kg", None, Some(supplier.id), None, true).await;

    let listed = products::list_products(&db, &Default::default()).await.unwrap();
    let fetched = products::get_product(&db, product.id).await.unwrap().unwrap();

    let listed_json: Value = serde_json::to_value(&listed[0]).unwrap();
    let fetched_json: Value = serde_json::to_value(&fetched).unwrap();
    assert_eq!(listed_json, fetched_json);
}

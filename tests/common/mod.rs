//! Shared harness: an in-memory SQLite store built from the entity
//! definitions, plus seed helpers. Each test gets a fresh database.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    Schema, Set,
};

use distributor_api::entities::{
    category, customer, inventory, order, order_item, product, shipment, supplier, warehouse,
};

pub async fn setup_db() -> DatabaseConnection {
    // a single pooled connection keeps every query on the same in-memory db
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");

    let schema = Schema::new(DbBackend::Sqlite);
    let builder = db.get_database_backend();

    let statements = [
        schema.create_table_from_entity(supplier::Entity),
        schema.create_table_from_entity(category::Entity),
        schema.create_table_from_entity(product::Entity),
        schema.create_table_from_entity(warehouse::Entity),
        schema.create_table_from_entity(inventory::Entity),
        schema.create_table_from_entity(customer::Entity),
        schema.create_table_from_entity(order::Entity),
        schema.create_table_from_entity(order_item::Entity),
        schema.create_table_from_entity(shipment::Entity),
    ];
    for stmt in &statements {
        db.execute(builder.build(stmt)).await.expect("create table");
    }

    db
}

pub async fn insert_supplier(db: &DatabaseConnection, name: &str) -> supplier::Model {
    supplier::ActiveModel {
        name: Set(name.to_owned()),
        city: Set(Some("Lima".to_owned())),
        country: Set(Some("Peru".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert supplier")
}

pub async fn insert_category(db: &DatabaseConnection, name: &str) -> category::Model {
    category::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert category")
}

pub async fn insert_product(
    db: &DatabaseConnection,
    name: &str,
    sku: Option<&str>,
    supplier_id: Option<i32>,
    category_id: Option<i32>,
    active: bool,
) -> product::Model {
    let flag = if active {
        product::ACTIVE
    } else {
        product::INACTIVE
    };
    product::ActiveModel {
        name: Set(name.to_owned()),
        sku: Set(sku.map(str::to_owned)),
        unit: Set("bag".to_owned()),
        unit_price: Set(Decimal::new(1000, 2)),
        supplier_id: Set(supplier_id),
        category_id: Set(category_id),
        is_active: Set(flag.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert product")
}

pub async fn insert_warehouse(
    db: &DatabaseConnection,
    name: &str,
    city: Option<&str>,
) -> warehouse::Model {
    warehouse::ActiveModel {
        name: Set(name.to_owned()),
        city: Set(city.map(str::to_owned)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert warehouse")
}

pub async fn insert_inventory(
    db: &DatabaseConnection,
    product_id: i32,
    warehouse_id: i32,
    quantity_on_hand: i32,
) -> inventory::Model {
    inventory::ActiveModel {
        product_id: Set(product_id),
        warehouse_id: Set(warehouse_id),
        quantity_on_hand: Set(quantity_on_hand),
        safety_stock: Set(Some(5)),
        last_restocked: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert inventory record")
}

pub async fn insert_customer(db: &DatabaseConnection, name: &str) -> customer::Model {
    customer::ActiveModel {
        name: Set(name.to_owned()),
        city: Set(Some("Cusco".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert customer")
}

pub async fn insert_order(
    db: &DatabaseConnection,
    customer_id: i32,
    order_date: NaiveDate,
    status: &str,
    total_amount: Decimal,
) -> order::Model {
    order::ActiveModel {
        customer_id: Set(customer_id),
        order_date: Set(order_date),
        required_date: Set(None),
        status: Set(status.to_owned()),
        total_amount: Set(total_amount),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert order")
}

pub async fn insert_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    unit_price: Decimal,
) -> order_item::Model {
    order_item::ActiveModel {
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        discount: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert order item")
}

pub async fn insert_shipment(
    db: &DatabaseConnection,
    order_id: i32,
    warehouse_id: Option<i32>,
    shipped_at: Option<DateTime<Utc>>,
    delivery_status: &str,
) -> shipment::Model {
    shipment::ActiveModel {
        order_id: Set(order_id),
        warehouse_id: Set(warehouse_id),
        shipped_at: Set(shipped_at),
        estimated_delivery: Set(None),
        delivery_status: Set(delivery_status.to_owned()),
        tracking_number: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert shipment")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, 0, 0)
        .expect("valid time")
        .and_utc()
}

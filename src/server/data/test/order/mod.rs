use crate::server::{data::order::OrderRepository, model::order::NewOrderRecord};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod last_number_with_prefix;

/// Builds an insertable order record with the given number.
fn record(order_number: &str) -> NewOrderRecord {
    NewOrderRecord {
        order_number: order_number.to_string(),
        user_id: None,
        customer_name: "Customer".to_string(),
        customer_email: "customer@example.com".to_string(),
        items: serde_json::json!([
            { "product_id": 1, "quantity": 1, "unit_price_cents": 1000 }
        ]),
        amount_cents: 1150,
        shipping_address: None,
        placed_at: Utc::now(),
    }
}

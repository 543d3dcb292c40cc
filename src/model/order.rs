use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One line of an order's immutable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_number: String,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItemDto>,
    pub amount_cents: i32,
    pub status: String,
    pub shipping_address: Option<serde_json::Value>,
    pub placed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Checkout request. The order amount and lines always come from the
/// caller's active cart; only contact and shipping details are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderDto {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderDto {
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<serde_json::Value>,
}

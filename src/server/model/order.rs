use chrono::{DateTime, Utc};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::{
    model::order::{OrderDto, OrderItemDto},
    server::error::AppError,
};

use entity::order::OrderStatus;

/// One line of an order's persisted JSON snapshot.
///
/// The shape is stable: it is what `orders.items` holds on disk, so changes
/// here are a data migration, not a refactor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

/// Converts an order entity to its DTO, decoding the line snapshot.
pub fn to_dto(model: entity::order::Model) -> Result<OrderDto, serde_json::Error> {
    let lines: Vec<OrderLine> = serde_json::from_value(model.items.clone())?;

    Ok(OrderDto {
        id: model.id,
        order_number: model.order_number,
        user_id: model.user_id,
        customer_name: model.customer_name,
        customer_email: model.customer_email,
        items: lines
            .into_iter()
            .map(|line| OrderItemDto {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect(),
        amount_cents: model.amount_cents,
        status: model.status.to_value(),
        shipping_address: model.shipping_address,
        placed_at: model.placed_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// Parses a wire status string into the typed enum.
pub fn status_from_str(raw: &str) -> Result<OrderStatus, AppError> {
    OrderStatus::try_from_value(&raw.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown order status: {}", raw)))
}

/// A fully assembled order row ready for insertion, produced inside the
/// placement transaction once stock has been secured.
pub struct NewOrderRecord {
    pub order_number: String,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub items: serde_json::Value,
    pub amount_cents: i32,
    pub shipping_address: Option<serde_json::Value>,
    pub placed_at: DateTime<Utc>,
}

/// Checkout parameters. Contact fields default to the authenticated user's
/// own details when absent.
pub struct PlaceOrderParams {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<serde_json::Value>,
}

/// Parameters for a staff order update. `None` fields are left unchanged.
#[derive(Default)]
pub struct UpdateOrderParams {
    pub status: Option<OrderStatus>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<serde_json::Value>,
}

/// Listing filter for the staff order index.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    /// Case-insensitive match against order number, customer name, or email.
    pub search: Option<String>,
    pub limit: Option<u64>,
}

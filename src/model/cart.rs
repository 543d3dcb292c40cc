use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductSummaryDto;

/// One cart line. `unit_price_cents` is the price snapshot captured when the
/// line was added or last updated, not the live catalog price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub product: Option<ProductSummaryDto>,
    pub quantity: i32,
    pub unit_price_cents: i32,
    pub line_total_cents: i64,
}

/// Full cart view returned by every cart endpoint, with totals derived on
/// read from the snapshotted line prices.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub session_id: Option<String>,
    pub status: String,
    pub items: Vec<CartItemDto>,
    pub total_items: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddToCartDto {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCartItemDto {
    pub quantity: i32,
}

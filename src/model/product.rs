use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageDto {
    pub id: i32,
    pub filename: String,
    pub url: String,
    pub position: i32,
}

/// Full catalog view of a product, including its image gallery and the
/// effective (discounted) price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub sku: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub discount_percent: Option<i16>,
    pub discounted_price_cents: i32,
    pub stock: i32,
    pub is_active: bool,
    pub metadata: Option<serde_json::Value>,
    pub images: Vec<ProductImageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact product view embedded in cart lines.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub price_cents: i32,
    pub discounted_price_cents: i32,
    pub stock: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductDto {
    pub sku: Option<String>,
    pub name: String,
    /// Generated from the name when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: i32,
    pub discount_percent: Option<i16>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductDto {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i32>,
    pub discount_percent: Option<i16>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddProductImageDto {
    pub filename: Option<String>,
    pub url: String,
    pub position: Option<i32>,
}

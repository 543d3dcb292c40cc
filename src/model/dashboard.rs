use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{order::OrderDto, product::ProductDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesAmountDto {
    pub amount_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalesSummaryDto {
    pub today: SalesAmountDto,
    pub week: SalesAmountDto,
    pub month: SalesAmountDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrdersSummaryDto {
    pub pending_count: u64,
    pub total_count: u64,
}

/// Aggregate figures for the back-office landing page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub sales_summary: SalesSummaryDto,
    pub orders_summary: OrdersSummaryDto,
    pub recent_orders: Vec<OrderDto>,
}

/// A product ranked by quantity sold across non-cancelled orders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopProductDto {
    pub product: ProductDto,
    pub total_quantity: i64,
    pub order_count: u64,
}

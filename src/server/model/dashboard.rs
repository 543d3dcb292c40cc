use crate::{
    model::dashboard::{
        DashboardSummaryDto, OrdersSummaryDto, SalesAmountDto, SalesSummaryDto, TopProductDto,
    },
    server::model::{order, product::ProductWithImages},
};

/// Aggregate figures for the back-office landing page.
pub struct DashboardSummary {
    pub sales_today_cents: i64,
    pub sales_week_cents: i64,
    pub sales_month_cents: i64,
    pub pending_count: u64,
    pub total_count: u64,
    pub recent_orders: Vec<entity::order::Model>,
}

impl DashboardSummary {
    /// Converts to the wire DTO, decoding each recent order's line snapshot.
    pub fn into_dto(self) -> Result<DashboardSummaryDto, serde_json::Error> {
        let recent_orders = self
            .recent_orders
            .into_iter()
            .map(order::to_dto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DashboardSummaryDto {
            sales_summary: SalesSummaryDto {
                today: SalesAmountDto {
                    amount_cents: self.sales_today_cents,
                },
                week: SalesAmountDto {
                    amount_cents: self.sales_week_cents,
                },
                month: SalesAmountDto {
                    amount_cents: self.sales_month_cents,
                },
            },
            orders_summary: OrdersSummaryDto {
                pending_count: self.pending_count,
                total_count: self.total_count,
            },
            recent_orders,
        })
    }
}

/// A product ranked by quantity sold across non-cancelled orders.
pub struct TopProduct {
    pub product: ProductWithImages,
    pub total_quantity: i64,
    pub order_count: u64,
}

impl TopProduct {
    pub fn into_dto(self) -> TopProductDto {
        TopProductDto {
            product: self.product.into_dto(),
            total_quantity: self.total_quantity,
            order_count: self.order_count,
        }
    }
}

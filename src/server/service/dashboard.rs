//! Dashboard service: back-office sales and order aggregates.
//!
//! Top-product figures are computed in Rust over the orders' persisted line
//! snapshots rather than with database-specific JSON SQL, so the aggregation
//! works unchanged on any backend.

use chrono::{Datelike, Duration, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::AppError,
    model::{
        dashboard::{DashboardSummary, TopProduct},
        order::OrderLine,
    },
};

use entity::order::OrderStatus;

/// Orders shown in the summary's recent list.
const RECENT_ORDER_COUNT: u64 = 5;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the landing-page summary: sales for today, the current week,
    /// and the current month (cancelled orders excluded), order counts, and
    /// the most recent orders.
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let repo = OrderRepository::new(self.db);

        let now = Utc::now();
        let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let week_start =
            today_start - Duration::days(now.date_naive().weekday().num_days_from_monday() as i64);
        let month_start = today_start - Duration::days(now.date_naive().day() as i64 - 1);

        // One fetch covers all three windows; the week can start in the
        // previous month, so the base is the earlier of the two.
        let base = week_start.min(month_start);
        let orders = repo.placed_since(base).await?;

        let sum_since = |start| {
            orders
                .iter()
                .filter(|order| order.placed_at >= start)
                .map(|order| order.amount_cents as i64)
                .sum()
        };

        Ok(DashboardSummary {
            sales_today_cents: sum_since(today_start),
            sales_week_cents: sum_since(week_start),
            sales_month_cents: sum_since(month_start),
            pending_count: repo.count_by_status(OrderStatus::Pending).await?,
            total_count: repo.count_all().await?,
            recent_orders: repo.recent(RECENT_ORDER_COUNT).await?,
        })
    }

    /// Ranks products by quantity sold across non-cancelled orders.
    ///
    /// Products that have since been removed from the catalog are dropped
    /// from the ranking rather than reported with a hole.
    pub async fn top_products(&self, limit: usize) -> Result<Vec<TopProduct>, AppError> {
        let order_repo = OrderRepository::new(self.db);
        let product_repo = ProductRepository::new(self.db);

        let orders = order_repo.all_non_cancelled().await?;

        let mut aggregates: HashMap<i32, (i64, u64)> = HashMap::new();
        for order in &orders {
            let lines: Vec<OrderLine> = serde_json::from_value(order.items.clone())?;
            for line in lines {
                let entry = aggregates.entry(line.product_id).or_insert((0, 0));
                entry.0 += line.quantity as i64;
                entry.1 += 1;
            }
        }

        let mut ranked: Vec<(i32, (i64, u64))> = aggregates.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));

        let mut result = Vec::new();
        for (product_id, (total_quantity, order_count)) in ranked {
            if result.len() >= limit {
                break;
            }

            if let Some(product) = product_repo.get_with_images(product_id).await? {
                result.push(TopProduct {
                    product,
                    total_quantity,
                    order_count,
                });
            }
        }

        Ok(result)
    }

    /// Lists the newest pending orders.
    pub async fn pending_orders(&self, limit: u64) -> Result<Vec<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.pending(limit).await?)
    }
}

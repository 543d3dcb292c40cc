//! Order factory for creating test orders.
//!
//! Orders created here carry a pre-built line snapshot; tests exercising
//! placement itself should go through the order service instead.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::order::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    amount_cents: i32,
    status: OrderStatus,
    placed_at: chrono::DateTime<Utc>,
    items: serde_json::Value,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - amount_cents: `1150`
    /// - status: `Pending`
    /// - placed_at: now
    /// - items: a single line of quantity 1 at 1000 cents
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            amount_cents: 1150,
            status: OrderStatus::Pending,
            placed_at: Utc::now(),
            items: serde_json::json!([
                { "product_id": 1, "quantity": 1, "unit_price_cents": 1000 }
            ]),
        }
    }

    /// Sets the owning user.
    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the order total in cents.
    pub fn amount_cents(mut self, amount_cents: i32) -> Self {
        self.amount_cents = amount_cents;
        self
    }

    /// Sets the order status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the placement timestamp.
    pub fn placed_at(mut self, placed_at: chrono::DateTime<Utc>) -> Self {
        self.placed_at = placed_at;
        self
    }

    /// Sets the order's line snapshot.
    pub fn items(mut self, items: serde_json::Value) -> Self {
        self.items = items;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let id = next_id();
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_number: ActiveValue::Set(format!("SO-19700101-{:04}", id)),
            user_id: ActiveValue::Set(self.user_id),
            customer_name: ActiveValue::Set(format!("Customer {}", id)),
            customer_email: ActiveValue::Set(format!("customer{}@example.com", id)),
            items: ActiveValue::Set(self.items),
            amount_cents: ActiveValue::Set(self.amount_cents),
            status: ActiveValue::Set(self.status),
            shipping_address: ActiveValue::Set(None),
            placed_at: ActiveValue::Set(self.placed_at),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order with default values.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}

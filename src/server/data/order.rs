//! Order data repository for database operations.
//!
//! This module provides the `OrderRepository` for inserting the immutable
//! order records produced at checkout and for the filtered queries behind the
//! customer and staff order listings and the dashboard aggregates.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::order::{NewOrderRecord, OrderFilter, UpdateOrderParams};

use entity::order::OrderStatus;

/// Repository providing database operations for order management.
pub struct OrderRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending order.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created order
    /// - `Err(DbErr)` - Database error during insert (including an order
    ///   number unique violation)
    pub async fn create(&self, record: NewOrderRecord) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();

        entity::order::ActiveModel {
            order_number: ActiveValue::Set(record.order_number),
            user_id: ActiveValue::Set(record.user_id),
            customer_name: ActiveValue::Set(record.customer_name),
            customer_email: ActiveValue::Set(record.customer_email),
            items: ActiveValue::Set(record.items),
            amount_cents: ActiveValue::Set(record.amount_cents),
            status: ActiveValue::Set(OrderStatus::Pending),
            shipping_address: ActiveValue::Set(record.shipping_address),
            placed_at: ActiveValue::Set(record.placed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an order by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Returns the highest order number carrying the given prefix.
    ///
    /// Order numbers share a per-day prefix, so the row with the greatest id
    /// under that prefix holds the last sequence number assigned today.
    ///
    /// # Arguments
    /// - `prefix` - Date prefix such as `SO-20250804-`
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The most recent order number with this prefix
    /// - `Ok(None)` - No orders placed under this prefix yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn last_number_with_prefix(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        let order = entity::prelude::Order::find()
            .filter(entity::order::Column::OrderNumber.starts_with(prefix))
            .order_by_desc(entity::order::Column::Id)
            .one(self.db)
            .await?;

        Ok(order.map(|order| order.order_number))
    }

    /// Lists orders matching the staff filter, newest placement first.
    pub async fn list(&self, filter: OrderFilter) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(entity::order::Column::PlacedAt.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(entity::order::Column::PlacedAt.lte(date_to));
        }
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::order::Column::OrderNumber.contains(search))
                    .add(entity::order::Column::CustomerName.contains(search))
                    .add(entity::order::Column::CustomerEmail.contains(search)),
            );
        }

        query = query.order_by_desc(entity::order::Column::PlacedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    /// Lists a customer's own orders, newest placement first.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::order::Column::PlacedAt)
            .all(self.db)
            .await
    }

    /// Updates an order's staff-editable fields; `None` params are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated order
    /// - `Ok(None)` - No order with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::order::ActiveModel = order.into();

        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(customer_name) = params.customer_name {
            active_model.customer_name = ActiveValue::Set(customer_name);
        }
        if let Some(customer_email) = params.customer_email {
            active_model.customer_email = ActiveValue::Set(customer_email);
        }
        if let Some(shipping_address) = params.shipping_address {
            active_model.shipping_address = ActiveValue::Set(Some(shipping_address));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Counts every order ever placed.
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Order::find().count(self.db).await
    }

    /// Counts orders currently in the given status.
    pub async fn count_by_status(&self, status: OrderStatus) -> Result<u64, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Returns the most recently created orders.
    pub async fn recent(&self, limit: u64) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .order_by_desc(entity::order::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Lists non-cancelled orders placed at or after the given instant.
    ///
    /// Used by the dashboard's sales figures and top-product aggregation;
    /// summation over the line snapshots happens in the service layer.
    pub async fn placed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::PlacedAt.gte(since))
            .filter(entity::order::Column::Status.ne(OrderStatus::Cancelled))
            .all(self.db)
            .await
    }

    /// Lists every non-cancelled order.
    pub async fn all_non_cancelled(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.ne(OrderStatus::Cancelled))
            .all(self.db)
            .await
    }

    /// Lists the newest pending orders.
    pub async fn pending(&self, limit: u64) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(OrderStatus::Pending))
            .order_by_desc(entity::order::Column::PlacedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}

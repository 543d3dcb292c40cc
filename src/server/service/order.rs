//! Order service: checkout and back-office order management.
//!
//! Placement is the point where the cart layer's advisory stock checks become
//! binding: each line's stock is decremented with a guarded update inside the
//! placement transaction, so a concurrent depletion aborts the whole order
//! with nothing committed. The order amount is always recomputed server-side
//! from the cart's snapshotted line prices.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, order::OrderRepository, product::ProductRepository},
    error::{cart::CartError, AppError},
    model::{
        cart::{CartConfig, OwnerKey},
        order::{NewOrderRecord, OrderFilter, OrderLine, PlaceOrderParams, UpdateOrderParams},
    },
    service::pricing,
};

use entity::order::OrderStatus;
use entity::user::UserRole;

/// Prefix and date stamp shared by every order number: `SO-YYYYMMDD-NNNN`.
const ORDER_NUMBER_PREFIX: &str = "SO";

/// Service handling order placement and staff order operations.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    config: CartConfig,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: CartConfig) -> Self {
        Self { db, config }
    }

    /// Converts the owner's active cart into an immutable order.
    ///
    /// Runs entirely in one transaction: every line's stock is atomically
    /// decremented (any shortfall aborts the whole placement), the amount is
    /// computed from the cart via the pricing engine, the lines are
    /// snapshotted into the order record, and the cart is marked converted so
    /// the owner's next cart access starts fresh.
    ///
    /// # Arguments
    /// - `owner` - Resolved cart owner key
    /// - `user` - The authenticated user, if any; supplies default contact details
    /// - `params` - Contact and shipping overrides
    ///
    /// # Returns
    /// - `Ok(Model)` - The created pending order
    /// - `Err(CartError::EmptyCart)` - No active cart, or it has no lines
    /// - `Err(CartError::InsufficientStock)` - A line lost the race for stock
    /// - `Err(AppError::BadRequest)` - Anonymous checkout without contact details
    pub async fn place(
        &self,
        owner: &OwnerKey,
        user: Option<&entity::user::Model>,
        params: PlaceOrderParams,
    ) -> Result<entity::order::Model, AppError> {
        let customer_name = params
            .customer_name
            .or_else(|| user.map(|user| user.name.clone()))
            .ok_or_else(|| AppError::BadRequest("Customer name is required".to_string()))?;
        let customer_email = params
            .customer_email
            .or_else(|| user.map(|user| user.email.clone()))
            .ok_or_else(|| AppError::BadRequest("Customer email is required".to_string()))?;

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let product_repo = ProductRepository::new(&txn);
        let order_repo = OrderRepository::new(&txn);

        let Some(cart) = cart_repo.find_active_by_owner(owner).await? else {
            return Err(CartError::EmptyCart.into());
        };

        let lines = cart_repo.load_lines(cart.id).await?;
        if lines.is_empty() {
            return Err(CartError::EmptyCart.into());
        }

        for line in &lines {
            let decremented = product_repo
                .decrement_stock(line.item.product_id, line.item.quantity)
                .await?;

            if !decremented {
                let available = product_repo
                    .current_stock(line.item.product_id)
                    .await?
                    .unwrap_or(0);

                return Err(CartError::InsufficientStock {
                    available_stock: available,
                    current_in_cart: Some(line.item.quantity),
                }
                .into());
            }
        }

        let totals = pricing::compute_totals(
            lines.iter().map(|line| &line.item),
            self.config.tax_rate_basis_points,
        );

        let order_lines: Vec<OrderLine> = lines
            .iter()
            .map(|line| OrderLine {
                product_id: line.item.product_id,
                quantity: line.item.quantity,
                unit_price_cents: line.item.unit_price_cents,
            })
            .collect();

        let placed_at = Utc::now();
        let order_number = next_order_number(&order_repo, placed_at).await?;

        let order = order_repo
            .create(NewOrderRecord {
                order_number,
                user_id: owner.user_id(),
                customer_name,
                customer_email,
                items: serde_json::to_value(order_lines)?,
                amount_cents: totals.total_cents as i32,
                shipping_address: params.shipping_address,
                placed_at,
            })
            .await?;

        cart_repo.mark_converted(cart).await?;

        txn.commit().await?;

        Ok(order)
    }

    /// Returns an order visible to the given user: their own, or any order
    /// for staff callers.
    pub async fn get_visible(
        &self,
        id: i32,
        user: &entity::user::Model,
    ) -> Result<Option<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(order) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let is_staff = matches!(user.role, UserRole::Admin | UserRole::Editor);
        if order.user_id == Some(user.id) || is_staff {
            Ok(Some(order))
        } else {
            Ok(None)
        }
    }

    /// Lists the customer's own orders, optionally filtered by status.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
    ) -> Result<Vec<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.list_for_user(user_id, status).await?)
    }

    /// Lists orders for the staff index.
    pub async fn list(&self, filter: OrderFilter) -> Result<Vec<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.list(filter).await?)
    }

    /// Updates an order's staff-editable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated order
    /// - `Ok(None)` - No order with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }

    /// Cancels an order by status change. The record is never deleted, and
    /// stock is not restored.
    pub async fn cancel(&self, id: i32) -> Result<Option<entity::order::Model>, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo
            .update(
                id,
                UpdateOrderParams {
                    status: Some(OrderStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await?)
    }
}

/// Generates the next order number for the given placement time.
///
/// Numbers are `SO-YYYYMMDD-NNNN` with the sequence restarting at 0001 each
/// day, continuing from the highest number already issued under today's
/// prefix. Must be called inside the placement transaction so two concurrent
/// checkouts cannot read the same last number.
async fn next_order_number<C: ConnectionTrait>(
    repo: &OrderRepository<'_, C>,
    placed_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let prefix = format!("{}-{}-", ORDER_NUMBER_PREFIX, placed_at.format("%Y%m%d"));

    let sequence = match repo.last_number_with_prefix(&prefix).await? {
        Some(last) => {
            last.rsplit('-')
                .next()
                .and_then(|suffix| suffix.parse::<u32>().ok())
                .unwrap_or(0)
                + 1
        }
        None => 1,
    };

    Ok(format!("{}{:04}", prefix, sequence))
}

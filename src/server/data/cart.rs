//! Cart data repository for database operations.
//!
//! This module provides the `CartRepository` for managing cart and cart line
//! records. It owns the atomic find-or-create used to guarantee a single
//! active cart per owner key, and the fully materialized cart-with-lines
//! loader consumed by the service layer. Line quantities are always re-read
//! here inside the caller's transaction before being rewritten, so concurrent
//! mutations of the same cart serialize instead of losing updates.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::cart::{CartLine, OwnerKey};

use entity::cart::CartStatus;

/// Repository providing database operations for cart management.
pub struct CartRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CartRepository<'a, C> {
    /// Creates a new CartRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `CartRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the owner's active cart, creating it if none exists.
    ///
    /// Uses `INSERT ... ON CONFLICT (owner_key) DO NOTHING` followed by a
    /// re-select rather than check-then-insert, so concurrent first-time
    /// callers with the same owner key converge on a single cart row.
    ///
    /// # Arguments
    /// - `owner` - The resolved owner key (user id or anonymous session)
    ///
    /// # Returns
    /// - `Ok(Model)` - The owner's single active cart
    /// - `Err(DbErr)` - Database error during insert or select
    pub async fn get_or_create(&self, owner: &OwnerKey) -> Result<entity::cart::Model, DbErr> {
        let now = Utc::now();

        entity::prelude::Cart::insert(entity::cart::ActiveModel {
            user_id: ActiveValue::Set(owner.user_id()),
            session_id: ActiveValue::Set(owner.session_id()),
            owner_key: ActiveValue::Set(Some(owner.key())),
            status: ActiveValue::Set(CartStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::cart::Column::OwnerKey)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find_active_by_owner(owner).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Active cart missing after upsert for {}", owner.key()))
        })
    }

    /// Finds the owner's active cart without creating one.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The active cart
    /// - `Ok(None)` - The owner has no active cart
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_owner(
        &self,
        owner: &OwnerKey,
    ) -> Result<Option<entity::cart::Model>, DbErr> {
        entity::prelude::Cart::find()
            .filter(entity::cart::Column::OwnerKey.eq(owner.key()))
            .one(self.db)
            .await
    }

    /// Loads a cart's lines joined with their products, ordered by line id.
    ///
    /// Materializes the whole aggregate in two queries (lines, then products)
    /// instead of per-line lazy loads. A line's product is `None` only if the
    /// product row was removed out from under the cart.
    ///
    /// # Arguments
    /// - `cart_id` - Cart to load lines for
    ///
    /// # Returns
    /// - `Ok(Vec<CartLine>)` - Lines with products, oldest line first
    /// - `Err(DbErr)` - Database error during query
    pub async fn load_lines(&self, cart_id: i32) -> Result<Vec<CartLine>, DbErr> {
        let items = entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .order_by_asc(entity::cart_item::Column::Id)
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = items.iter().map(|item| item.product_id).collect();

        let mut products: HashMap<i32, entity::product::Model> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        Ok(items
            .into_iter()
            .map(|item| {
                let product = products.remove(&item.product_id);
                CartLine { item, product }
            })
            .collect())
    }

    /// Finds a cart line by cart and product, the pair the table keeps unique.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The existing line for this product
    /// - `Ok(None)` - The product is not in the cart
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_item_by_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::cart_item::Model>, DbErr> {
        entity::prelude::CartItem::find()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .filter(entity::cart_item::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Finds a cart line by id. Ownership against a particular cart is the
    /// caller's check.
    pub async fn find_item(&self, item_id: i32) -> Result<Option<entity::cart_item::Model>, DbErr> {
        entity::prelude::CartItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    /// Inserts a new cart line with a freshly snapshotted unit price.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created line
    /// - `Err(DbErr)` - Database error during insert (including a unique
    ///   violation when a concurrent insert won the (cart, product) pair)
    pub async fn insert_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        unit_price_cents: i32,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let now = Utc::now();

        entity::cart_item::ActiveModel {
            cart_id: ActiveValue::Set(cart_id),
            product_id: ActiveValue::Set(product_id),
            quantity: ActiveValue::Set(quantity),
            unit_price_cents: ActiveValue::Set(unit_price_cents),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Rewrites a line's quantity and re-snapshots its unit price.
    ///
    /// # Arguments
    /// - `item` - The line as read inside the current transaction
    /// - `quantity` - New absolute quantity
    /// - `unit_price_cents` - Current discounted product price
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated line
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_item(
        &self,
        item: entity::cart_item::Model,
        quantity: i32,
        unit_price_cents: i32,
    ) -> Result<entity::cart_item::Model, DbErr> {
        let mut active_model: entity::cart_item::ActiveModel = item.into();
        active_model.quantity = ActiveValue::Set(quantity);
        active_model.unit_price_cents = ActiveValue::Set(unit_price_cents);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a single cart line.
    pub async fn delete_item(&self, item_id: i32) -> Result<(), DbErr> {
        entity::prelude::CartItem::delete_by_id(item_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every line in the cart. Returns the number of removed lines;
    /// zero on an already-empty cart.
    pub async fn clear_items(&self, cart_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CartItem::delete_many()
            .filter(entity::cart_item::Column::CartId.eq(cart_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Bumps the cart's `updated_at`, marking it touched for the abandonment
    /// sweeper.
    pub async fn touch(&self, cart: entity::cart::Model) -> Result<entity::cart::Model, DbErr> {
        let mut active_model: entity::cart::ActiveModel = cart.into();
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Marks a cart converted after order placement and releases its owner
    /// key, so the owner's next cart access creates a fresh active cart.
    pub async fn mark_converted(&self, cart: entity::cart::Model) -> Result<(), DbErr> {
        let mut active_model: entity::cart::ActiveModel = cart.into();
        active_model.status = ActiveValue::Set(CartStatus::Converted);
        active_model.owner_key = ActiveValue::Set(None);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await?;

        Ok(())
    }

    /// Marks active carts untouched since `cutoff` as abandoned, releasing
    /// their owner keys.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of carts transitioned
    /// - `Err(DbErr)` - Database error during update
    pub async fn abandon_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Cart::update_many()
            .col_expr(
                entity::cart::Column::Status,
                Expr::value(CartStatus::Abandoned.to_value()),
            )
            .col_expr(
                entity::cart::Column::OwnerKey,
                Expr::value(Option::<String>::None),
            )
            .filter(entity::cart::Column::Status.eq(CartStatus::Active))
            .filter(entity::cart::Column::UpdatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

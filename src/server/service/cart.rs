//! Cart service: the single authority for mutating cart contents.
//!
//! Every mutating operation runs inside one transaction spanning the stock
//! check and the write, so a failure leaves the persisted cart unchanged and
//! concurrent mutations of the same cart serialize instead of losing updates.
//!
//! The stock check itself is advisory: nothing is reserved at cart time, and
//! two carts racing for the last unit can both pass the check. That window is
//! accepted here and closed at order placement, where the decrement is a
//! guarded compare-and-swap.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, product::ProductRepository},
    error::{cart::CartError, AppError},
    model::cart::{CartConfig, CartView, OwnerKey},
    service::pricing,
};

/// Service handling cart reads and stock-constrained mutations.
pub struct CartService<'a> {
    db: &'a DatabaseConnection,
    config: CartConfig,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: CartConfig) -> Self {
        Self { db, config }
    }

    /// Returns the owner's active cart with derived totals, creating the cart
    /// on first access.
    ///
    /// Idempotent under concurrency: the underlying find-or-create is a
    /// single atomic insert-on-conflict, so concurrent first-time calls with
    /// the same owner key converge on one cart row.
    pub async fn get_or_create(&self, owner: &OwnerKey) -> Result<CartView, AppError> {
        let cart_repo = CartRepository::new(self.db);

        let cart = cart_repo.get_or_create(owner).await?;
        let lines = cart_repo.load_lines(cart.id).await?;

        Ok(CartView::new(cart, lines, self.config.tax_rate_basis_points))
    }

    /// Adds a product to the owner's cart, merging into an existing line.
    ///
    /// The stock check covers the requested quantity plus whatever is already
    /// in the cart for the same product. On success the line's unit price is
    /// re-snapshotted from the product's current discounted price; product
    /// stock itself is not touched.
    ///
    /// # Returns
    /// - `Ok(CartView)` - The full cart after the mutation
    /// - `Err(CartError::InvalidQuantity)` - Quantity outside `1..=max`, or the
    ///   merged line would exceed the cap
    /// - `Err(CartError::InsufficientStock)` - Demand exceeds current stock
    /// - `Err(AppError::NotFound)` - No such product, or it is deactivated
    pub async fn add_item(
        &self,
        owner: &OwnerKey,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartView, AppError> {
        self.check_quantity(quantity)?;

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let product_repo = ProductRepository::new(&txn);

        let cart = cart_repo.get_or_create(owner).await?;

        let Some(product) = product_repo.find_available_by_id(product_id).await? else {
            return Err(AppError::NotFound("Product not found".to_string()));
        };

        let existing = cart_repo.find_item_by_product(cart.id, product_id).await?;
        let current_in_cart = existing.as_ref().map(|item| item.quantity);
        let merged_quantity = quantity + current_in_cart.unwrap_or(0);

        if merged_quantity > product.stock {
            return Err(CartError::InsufficientStock {
                available_stock: product.stock,
                current_in_cart,
            }
            .into());
        }

        if merged_quantity > self.config.max_item_quantity {
            return Err(CartError::InvalidQuantity {
                max: self.config.max_item_quantity,
            }
            .into());
        }

        let unit_price_cents =
            pricing::discounted_price_cents(product.price_cents, product.discount_percent);

        match existing {
            Some(item) => {
                cart_repo
                    .update_item(item, merged_quantity, unit_price_cents)
                    .await?;
            }
            None => {
                cart_repo
                    .insert_item(cart.id, product_id, quantity, unit_price_cents)
                    .await?;
            }
        }

        let cart = cart_repo.touch(cart).await?;
        let lines = cart_repo.load_lines(cart.id).await?;

        txn.commit().await?;

        Ok(CartView::new(cart, lines, self.config.tax_rate_basis_points))
    }

    /// Sets a cart line to an absolute quantity, re-snapshotting its price.
    ///
    /// The ownership check runs before anything else: a line id belonging to
    /// another owner's cart is indistinguishable from a missing line.
    ///
    /// # Returns
    /// - `Ok(CartView)` - The full cart after the mutation
    /// - `Err(CartError::ItemNotFound)` - Line missing or not in this cart
    /// - `Err(CartError::InsufficientStock)` - Quantity exceeds current stock
    pub async fn update_item(
        &self,
        owner: &OwnerKey,
        item_id: i32,
        quantity: i32,
    ) -> Result<CartView, AppError> {
        self.check_quantity(quantity)?;

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let product_repo = ProductRepository::new(&txn);

        let Some(cart) = cart_repo.find_active_by_owner(owner).await? else {
            return Err(CartError::ItemNotFound.into());
        };

        let Some(item) = cart_repo.find_item(item_id).await? else {
            return Err(CartError::ItemNotFound.into());
        };

        if item.cart_id != cart.id {
            return Err(CartError::ItemNotFound.into());
        }

        let Some(product) = product_repo.find_available_by_id(item.product_id).await? else {
            return Err(AppError::NotFound(
                "Product is no longer available".to_string(),
            ));
        };

        if quantity > product.stock {
            return Err(CartError::InsufficientStock {
                available_stock: product.stock,
                current_in_cart: None,
            }
            .into());
        }

        let unit_price_cents =
            pricing::discounted_price_cents(product.price_cents, product.discount_percent);

        cart_repo.update_item(item, quantity, unit_price_cents).await?;

        let cart = cart_repo.touch(cart).await?;
        let lines = cart_repo.load_lines(cart.id).await?;

        txn.commit().await?;

        Ok(CartView::new(cart, lines, self.config.tax_rate_basis_points))
    }

    /// Removes a single line from the owner's cart.
    ///
    /// # Returns
    /// - `Ok(CartView)` - The full cart after the removal
    /// - `Err(CartError::ItemNotFound)` - Line missing or not in this cart
    pub async fn remove_item(&self, owner: &OwnerKey, item_id: i32) -> Result<CartView, AppError> {
        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);

        let Some(cart) = cart_repo.find_active_by_owner(owner).await? else {
            return Err(CartError::ItemNotFound.into());
        };

        let Some(item) = cart_repo.find_item(item_id).await? else {
            return Err(CartError::ItemNotFound.into());
        };

        if item.cart_id != cart.id {
            return Err(CartError::ItemNotFound.into());
        }

        cart_repo.delete_item(item.id).await?;

        let cart = cart_repo.touch(cart).await?;
        let lines = cart_repo.load_lines(cart.id).await?;

        txn.commit().await?;

        Ok(CartView::new(cart, lines, self.config.tax_rate_basis_points))
    }

    /// Deletes every line in the owner's cart. Idempotent on an empty cart.
    pub async fn clear(&self, owner: &OwnerKey) -> Result<CartView, AppError> {
        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);

        let cart = cart_repo.get_or_create(owner).await?;

        cart_repo.clear_items(cart.id).await?;

        let cart = cart_repo.touch(cart).await?;

        txn.commit().await?;

        Ok(CartView::new(
            cart,
            Vec::new(),
            self.config.tax_rate_basis_points,
        ))
    }

    fn check_quantity(&self, quantity: i32) -> Result<(), CartError> {
        if quantity < 1 || quantity > self.config.max_item_quantity {
            return Err(CartError::InvalidQuantity {
                max: self.config.max_item_quantity,
            });
        }

        Ok(())
    }
}

//! Product factory for creating test catalog products.
//!
//! This module provides factory methods for creating product entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .price_cents(1500)
///     .discount_percent(Some(20))
///     .stock(5)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    sku: Option<String>,
    price_cents: i32,
    discount_percent: Option<i16>,
    stock: i32,
    is_active: bool,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"` where id is auto-incremented
    /// - slug: `"product-{id}"`
    /// - sku: `"SKU-{id}"`
    /// - price_cents: `1000`
    /// - discount_percent: `None`
    /// - stock: `10`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProductFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            sku: Some(format!("SKU-{}", id)),
            price_cents: 1000,
            discount_percent: None,
            stock: 10,
            is_active: true,
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the base price in cents.
    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the discount percentage (0-100).
    pub fn discount_percent(mut self, discount_percent: Option<i16>) -> Self {
        self.discount_percent = discount_percent;
        self
    }

    /// Sets the available stock count.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Sets whether the product is available in the catalog.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            sku: ActiveValue::Set(self.sku),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(Some("Test product description".to_string())),
            price_cents: ActiveValue::Set(self.price_cents),
            discount_percent: ActiveValue::Set(self.discount_percent),
            stock: ActiveValue::Set(self.stock),
            is_active: ActiveValue::Set(self.is_active),
            metadata: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::product::Model)` - Created product entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::Product;

    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let product = create_product(db).await?;

        assert!(!product.name.is_empty());
        assert_eq!(product.price_cents, 1000);
        assert_eq!(product.stock, 10);
        assert!(product.is_active);
        assert!(product.discount_percent.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_products() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_product(db).await?;
        let second = create_product(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);
        assert_ne!(first.sku, second.sku);

        Ok(())
    }
}

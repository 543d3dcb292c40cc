//! Product data repository for database operations.
//!
//! This module provides the `ProductRepository` for managing catalog products
//! and their image records. It is also the stock authority consumed by the
//! cart layer (`current_stock`) and by order placement
//! (`decrement_stock`, the only writer of the stock counter).

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::product::{
    AddProductImageParams, CreateProductParams, ProductFilter, ProductWithImages,
    UpdateProductParams,
};

/// Repository providing database operations for product management.
pub struct ProductRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `ProductRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new product.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created product
    /// - `Err(DbErr)` - Database error during insert (including slug/sku
    ///   unique violations)
    pub async fn create(
        &self,
        params: CreateProductParams,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();

        entity::product::ActiveModel {
            sku: ActiveValue::Set(params.sku),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            price_cents: ActiveValue::Set(params.price_cents),
            discount_percent: ActiveValue::Set(params.discount_percent),
            stock: ActiveValue::Set(params.stock),
            is_active: ActiveValue::Set(params.is_active),
            metadata: ActiveValue::Set(params.metadata),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a product's fields; `None` params are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated product
    /// - `Err(DbErr::RecordNotFound)` - No product with this id
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<entity::product::Model, DbErr> {
        let product = entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Product {} not found", id)))?;

        let mut active_model: entity::product::ActiveModel = product.into();

        if let Some(sku) = params.sku {
            active_model.sku = ActiveValue::Set(Some(sku));
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(price_cents) = params.price_cents {
            active_model.price_cents = ActiveValue::Set(price_cents);
        }
        if let Some(discount_percent) = params.discount_percent {
            active_model.discount_percent = ActiveValue::Set(Some(discount_percent));
        }
        if let Some(stock) = params.stock {
            active_model.stock = ActiveValue::Set(stock);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(metadata) = params.metadata {
            active_model.metadata = ActiveValue::Set(Some(metadata));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Finds a product by id regardless of its availability flag.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Finds an available (active) product by id.
    ///
    /// The cart layer resolves products through this method, so deactivated
    /// products cannot be added to carts.
    pub async fn find_available_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Reads a product's current stock count.
    ///
    /// This is an advisory read: nothing is reserved, and the value may be
    /// stale as soon as it is returned.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Current stock
    /// - `Ok(None)` - No such product
    /// - `Err(DbErr)` - Database error during query
    pub async fn current_stock(&self, id: i32) -> Result<Option<i32>, DbErr> {
        Ok(self.find_by_id(id).await?.map(|product| product.stock))
    }

    /// Atomically decrements a product's stock if enough remains.
    ///
    /// Issues `UPDATE products SET stock = stock - q WHERE id = ? AND
    /// stock >= q` and reports via the affected-row count whether the
    /// decrement happened. This is the compare-and-swap that order placement
    /// relies on; a `false` return means a concurrent order depleted the
    /// stock first.
    ///
    /// # Arguments
    /// - `id` - Product to decrement
    /// - `quantity` - Units to remove
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was decremented
    /// - `Ok(false)` - Insufficient stock at execution time
    /// - `Err(DbErr)` - Database error during update
    pub async fn decrement_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).sub(quantity),
            )
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a product's availability flag.
    ///
    /// # Returns
    /// - `Ok(true)` - The product existed and was updated
    /// - `Ok(false)` - No product with this id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(entity::product::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads a product with its image gallery.
    pub async fn get_with_images(&self, id: i32) -> Result<Option<ProductWithImages>, DbErr> {
        let Some(product) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let images = entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.eq(id))
            .order_by_asc(entity::product_image::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(ProductWithImages { product, images }))
    }

    /// Lists products matching the filter, newest first, with their images.
    ///
    /// # Arguments
    /// - `filter` - Search text, collection restriction, stock/availability flags
    ///
    /// # Returns
    /// - `Ok(Vec<ProductWithImages>)` - Matching products ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductWithImages>, DbErr> {
        let mut query = entity::prelude::Product::find();

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::product::Column::Name.contains(search))
                    .add(entity::product::Column::Description.contains(search))
                    .add(entity::product::Column::Sku.contains(search)),
            );
        }

        if let Some(collection_id) = filter.collection_id {
            let product_ids: Vec<i32> = entity::prelude::CollectionProduct::find()
                .filter(entity::collection_product::Column::CollectionId.eq(collection_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|row| row.product_id)
                .collect();

            query = query.filter(entity::product::Column::Id.is_in(product_ids));
        }

        if filter.in_stock {
            query = query.filter(entity::product::Column::Stock.gt(0));
        }

        if !filter.include_inactive {
            query = query.filter(entity::product::Column::IsActive.eq(true));
        }

        let products = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = products.iter().map(|product| product.id).collect();
        let mut images = self.images_for(&ids).await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let images = images.remove(&product.id).unwrap_or_default();
                ProductWithImages { product, images }
            })
            .collect())
    }

    /// Loads image galleries for a set of products, grouped by product id and
    /// ordered by position.
    pub async fn images_for(
        &self,
        product_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::product_image::Model>>, DbErr> {
        let rows = entity::prelude::ProductImage::find()
            .filter(entity::product_image::Column::ProductId.is_in(product_ids.to_vec()))
            .order_by_asc(entity::product_image::Column::Position)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::product_image::Model>> = HashMap::new();
        for row in rows {
            grouped.entry(row.product_id).or_default().push(row);
        }

        Ok(grouped)
    }

    /// Attaches an image record to a product.
    pub async fn add_image(
        &self,
        params: AddProductImageParams,
    ) -> Result<entity::product_image::Model, DbErr> {
        let now = Utc::now();

        entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            filename: ActiveValue::Set(params.filename),
            url: ActiveValue::Set(params.url),
            position: ActiveValue::Set(params.position),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes an image record, verifying it belongs to the given product.
    ///
    /// # Returns
    /// - `Ok(true)` - The image existed under this product and was deleted
    /// - `Ok(false)` - No such image for this product
    pub async fn delete_image(&self, product_id: i32, image_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProductImage::delete_many()
            .filter(entity::product_image::Column::Id.eq(image_id))
            .filter(entity::product_image::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

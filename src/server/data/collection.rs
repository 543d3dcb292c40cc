//! Collection data repository for database operations.
//!
//! This module provides the `CollectionRepository` for managing catalog
//! collections and their product assignments. Assignment is replace-all: the
//! join table is rewritten from the given product list, with positions
//! following list order.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::collection::{CreateCollectionParams, UpdateCollectionParams};

/// Repository providing database operations for collection management.
pub struct CollectionRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    /// Creates a new CollectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `CollectionRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new collection.
    pub async fn create(
        &self,
        params: CreateCollectionParams,
    ) -> Result<entity::collection::Model, DbErr> {
        let now = Utc::now();

        entity::collection::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
            cover_image: ActiveValue::Set(params.cover_image),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a collection's fields; `None` params are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated collection
    /// - `Err(DbErr::RecordNotFound)` - No collection with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCollectionParams,
    ) -> Result<entity::collection::Model, DbErr> {
        let collection = self
            .find_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Collection {} not found", id)))?;

        let mut active_model: entity::collection::ActiveModel = collection.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(cover_image) = params.cover_image {
            active_model.cover_image = ActiveValue::Set(Some(cover_image));
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Finds a collection by id regardless of its availability flag.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists collections, newest first.
    pub async fn list(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<entity::collection::Model>, DbErr> {
        let mut query = entity::prelude::Collection::find();

        if !include_inactive {
            query = query.filter(entity::collection::Column::IsActive.eq(true));
        }

        query
            .order_by_desc(entity::collection::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets a collection's availability flag.
    ///
    /// # Returns
    /// - `Ok(true)` - The collection existed and was updated
    /// - `Ok(false)` - No collection with this id
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Collection::update_many()
            .col_expr(entity::collection::Column::IsActive, Expr::value(is_active))
            .col_expr(entity::collection::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::collection::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the collection's products in assignment-position order.
    pub async fn assigned_products(
        &self,
        collection_id: i32,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        let assignments = entity::prelude::CollectionProduct::find()
            .filter(entity::collection_product::Column::CollectionId.eq(collection_id))
            .order_by_asc(entity::collection_product::Column::Position)
            .all(self.db)
            .await?;

        let product_ids: Vec<i32> = assignments.iter().map(|row| row.product_id).collect();

        let mut products: HashMap<i32, entity::product::Model> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        Ok(product_ids
            .into_iter()
            .filter_map(|id| products.remove(&id))
            .collect())
    }

    /// Replaces the collection's product list; positions follow list order.
    pub async fn replace_products(
        &self,
        collection_id: i32,
        product_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::CollectionProduct::delete_many()
            .filter(entity::collection_product::Column::CollectionId.eq(collection_id))
            .exec(self.db)
            .await?;

        if product_ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let assignments =
            product_ids
                .iter()
                .enumerate()
                .map(|(position, product_id)| entity::collection_product::ActiveModel {
                    collection_id: ActiveValue::Set(collection_id),
                    product_id: ActiveValue::Set(*product_id),
                    position: ActiveValue::Set(position as i32),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                });

        entity::prelude::CollectionProduct::insert_many(assignments)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes one product from the collection.
    ///
    /// # Returns
    /// - `Ok(true)` - The assignment existed and was deleted
    /// - `Ok(false)` - The product was not in the collection
    pub async fn remove_product(&self, collection_id: i32, product_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CollectionProduct::delete_many()
            .filter(entity::collection_product::Column::CollectionId.eq(collection_id))
            .filter(entity::collection_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Banner data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::banner::{CreateBannerParams, UpdateBannerParams};

/// Repository providing database operations for homepage banners.
pub struct BannerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BannerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new banner.
    pub async fn create(&self, params: CreateBannerParams) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now();

        entity::banner::ActiveModel {
            title: ActiveValue::Set(params.title),
            tagline: ActiveValue::Set(params.tagline),
            image: ActiveValue::Set(params.image),
            position: ActiveValue::Set(params.position),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a banner by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::banner::Model>, DbErr> {
        entity::prelude::Banner::find_by_id(id).one(self.db).await
    }

    /// Lists banners in position order.
    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::banner::Model>, DbErr> {
        let mut query = entity::prelude::Banner::find();

        if active_only {
            query = query.filter(entity::banner::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::banner::Column::Position)
            .all(self.db)
            .await
    }

    /// Updates a banner's fields; `None` params are left unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated banner
    /// - `Ok(None)` - No banner with this id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBannerParams,
    ) -> Result<Option<entity::banner::Model>, DbErr> {
        let Some(banner) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::banner::ActiveModel = banner.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(tagline) = params.tagline {
            active_model.tagline = ActiveValue::Set(Some(tagline));
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        if let Some(position) = params.position {
            active_model.position = ActiveValue::Set(position);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a banner. Hard delete, there is no trash state for banners.
    ///
    /// # Returns
    /// - `Ok(true)` - The banner existed and was deleted
    /// - `Ok(false)` - No banner with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

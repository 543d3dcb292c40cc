//! About-page data repository.
//!
//! The about table is a singleton: reads take the first row, and the upsert
//! either rewrites that row or creates it on first publish.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for the singleton about-page row.
pub struct AboutRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AboutRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the published about page, if any.
    pub async fn get(&self) -> Result<Option<entity::about::Model>, DbErr> {
        entity::prelude::About::find().one(self.db).await
    }

    /// Rewrites the about page, creating the row on first publish.
    ///
    /// # Arguments
    /// - `content` - Page body
    /// - `milestones` - Optional structured milestone list
    /// - `updated_by_user_id` - Staff user making the change
    pub async fn upsert(
        &self,
        content: String,
        milestones: Option<serde_json::Value>,
        updated_by_user_id: i32,
    ) -> Result<entity::about::Model, DbErr> {
        let now = Utc::now();

        match self.get().await? {
            Some(existing) => {
                let mut active_model: entity::about::ActiveModel = existing.into();
                active_model.content = ActiveValue::Set(content);
                active_model.milestones = ActiveValue::Set(milestones);
                active_model.updated_by_user_id = ActiveValue::Set(updated_by_user_id);
                active_model.updated_at = ActiveValue::Set(now);

                active_model.update(self.db).await
            }
            None => {
                entity::about::ActiveModel {
                    content: ActiveValue::Set(content),
                    milestones: ActiveValue::Set(milestones),
                    updated_by_user_id: ActiveValue::Set(updated_by_user_id),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }
}

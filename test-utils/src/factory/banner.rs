//! Banner factory for creating test homepage banners.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test banners with customizable fields.
pub struct BannerFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    position: i32,
    is_active: bool,
}

impl<'a> BannerFactory<'a> {
    /// Creates a new BannerFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Banner {id}"` where id is auto-incremented
    /// - position: `0`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Banner {}", id),
            position: 0,
            is_active: true,
        }
    }

    /// Sets the banner position used for ordering.
    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets whether the banner is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the banner entity into the database.
    pub async fn build(self) -> Result<entity::banner::Model, DbErr> {
        entity::banner::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            tagline: ActiveValue::Set(None),
            image: ActiveValue::Set("https://example.com/banner.jpg".to_string()),
            position: ActiveValue::Set(self.position),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a banner with default values.
pub async fn create_banner(db: &DatabaseConnection) -> Result<entity::banner::Model, DbErr> {
    BannerFactory::new(db).build().await
}

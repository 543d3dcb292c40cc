//! Collection factory for creating test catalog collections.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test collections with customizable fields.
pub struct CollectionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    is_active: bool,
}

impl<'a> CollectionFactory<'a> {
    /// Creates a new CollectionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Collection {id}"` where id is auto-incremented
    /// - slug: `"collection-{id}"`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Collection {}", id),
            slug: format!("collection-{}", id),
            is_active: true,
        }
    }

    /// Sets the collection name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the collection is active.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the collection entity into the database.
    pub async fn build(self) -> Result<entity::collection::Model, DbErr> {
        entity::collection::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a collection with default values.
pub async fn create_collection(
    db: &DatabaseConnection,
) -> Result<entity::collection::Model, DbErr> {
    CollectionFactory::new(db).build().await
}

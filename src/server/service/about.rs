//! About-page service.

use sea_orm::DatabaseConnection;

use crate::server::{data::about::AboutRepository, error::AppError};

pub struct AboutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the published about page, if any.
    pub async fn get(&self) -> Result<Option<entity::about::Model>, AppError> {
        let repo = AboutRepository::new(self.db);

        Ok(repo.get().await?)
    }

    /// Publishes or rewrites the about page, recording the editing user.
    pub async fn upsert(
        &self,
        content: String,
        milestones: Option<serde_json::Value>,
        updated_by_user_id: i32,
    ) -> Result<entity::about::Model, AppError> {
        let repo = AboutRepository::new(self.db);

        Ok(repo.upsert(content, milestones, updated_by_user_id).await?)
    }
}

//! Contact message service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::message::{MessageFilter, StoreMessageParams},
};

use entity::message::MessageStatus;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a publicly submitted message.
    pub async fn submit(
        &self,
        params: StoreMessageParams,
    ) -> Result<entity::message::Model, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists messages for the staff inbox, newest first.
    pub async fn list(&self, filter: MessageFilter) -> Result<Vec<entity::message::Model>, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.list(filter).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::message::Model>, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Updates a message's triage status.
    pub async fn update_status(
        &self,
        id: i32,
        status: MessageStatus,
    ) -> Result<Option<entity::message::Model>, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.update_status(id, status).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MessageRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}

//! Contact message data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::message::{MessageFilter, StoreMessageParams};

use entity::message::MessageStatus;

/// Repository providing database operations for contact messages.
pub struct MessageRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a newly submitted message with status `new`.
    pub async fn create(&self, params: StoreMessageParams) -> Result<entity::message::Model, DbErr> {
        let now = Utc::now();

        entity::message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            message: ActiveValue::Set(params.message),
            kind: ActiveValue::Set(params.kind),
            status: ActiveValue::Set(MessageStatus::New),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a message by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(id).one(self.db).await
    }

    /// Lists messages matching the filter, newest first.
    pub async fn list(&self, filter: MessageFilter) -> Result<Vec<entity::message::Model>, DbErr> {
        let mut query = entity::prelude::Message::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::message::Column::Status.eq(status));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(entity::message::Column::Kind.eq(kind));
        }

        query
            .order_by_desc(entity::message::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Updates a message's triage status.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated message
    /// - `Ok(None)` - No message with this id
    pub async fn update_status(
        &self,
        id: i32,
        status: MessageStatus,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        let Some(message) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::message::ActiveModel = message.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(true)` - The message existed and was deleted
    /// - `Ok(false)` - No message with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

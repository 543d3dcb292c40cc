//! Message factory for creating test contact messages.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::message::{MessageKind, MessageStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contact messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    kind: MessageKind,
    status: MessageStatus,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Customer {id}"` where id is auto-incremented
    /// - email: `"customer{id}@example.com"`
    /// - kind: `Contact`
    /// - status: `New`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Customer {}", id),
            email: format!("customer{}@example.com", id),
            kind: MessageKind::Contact,
            status: MessageStatus::New,
        }
    }

    /// Sets the message kind.
    pub fn kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the message status.
    pub fn status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            message: ActiveValue::Set("Test message body".to_string()),
            kind: ActiveValue::Set(self.kind),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a contact message with default values.
pub async fn create_message(db: &DatabaseConnection) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db).build().await
}

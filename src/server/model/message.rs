use sea_orm::ActiveEnum;

use crate::{model::message::MessageDto, server::error::AppError};

use entity::message::{MessageKind, MessageStatus};

/// Parameters for storing a submitted contact message.
pub struct StoreMessageParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub kind: MessageKind,
}

/// Listing filter for the staff message index.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub status: Option<MessageStatus>,
    pub kind: Option<MessageKind>,
}

pub fn to_dto(model: entity::message::Model) -> MessageDto {
    MessageDto {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        message: model.message,
        kind: model.kind.to_value(),
        status: model.status.to_value(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Parses a wire kind string into the typed enum.
pub fn kind_from_str(raw: &str) -> Result<MessageKind, AppError> {
    MessageKind::try_from_value(&raw.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown message type: {}", raw)))
}

/// Parses a wire status string into the typed enum.
pub fn status_from_str(raw: &str) -> Result<MessageStatus, AppError> {
    MessageStatus::try_from_value(&raw.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown message status: {}", raw)))
}

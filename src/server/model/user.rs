use sea_orm::ActiveEnum;

use crate::model::user::UserDto;

/// Converts a user entity to its public DTO, dropping credential material.
pub fn to_dto(model: entity::user::Model) -> UserDto {
    UserDto {
        id: model.id,
        name: model.name,
        email: model.email,
        role: model.role.to_value(),
        phone: model.phone,
        address: model.address,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// Parameters for creating a new user account.
///
/// The password is already hashed by the time this struct exists; raw
/// passwords never cross the data layer boundary.
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: entity::user::UserRole,
    pub phone: Option<String>,
    pub address: Option<serde_json::Value>,
}

/// Parameters for updating an account profile. `None` fields are left unchanged.
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<serde_json::Value>,
}

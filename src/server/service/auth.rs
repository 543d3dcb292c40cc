//! Authentication service: registration, login, and profile updates.
//!
//! Passwords are hashed with argon2 in PHC string format; raw passwords never
//! leave this module. Identity is carried by the session layer, which the
//! controller writes after a successful login or registration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, UpdateProfileParams},
};

use entity::user::UserRole;

const MIN_PASSWORD_LENGTH: usize = 8;

/// Service handling account credentials and profiles.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(AuthError::EmailTaken)` - The email is already registered
    /// - `Err(AppError::BadRequest)` - Password below the minimum length
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
        phone: Option<String>,
        address: Option<serde_json::Value>,
    ) -> Result<entity::user::Model, AppError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(password)?;

        Ok(repo
            .create(RegisterUserParams {
                name,
                email,
                password_hash,
                role: UserRole::Customer,
                phone,
                address,
            })
            .await?)
    }

    /// Verifies credentials and returns the account.
    ///
    /// Unknown email and wrong password produce the same error, so callers
    /// cannot probe which addresses are registered.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Updates the account's profile fields.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.update_profile(user_id, params).await?)
    }
}

/// Hashes a password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Verifies a password against a stored PHC string.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

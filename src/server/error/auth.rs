use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session.
    #[error("Unauthenticated.")]
    NotAuthenticated,

    /// The session references a user id that no longer exists.
    #[error("Session user {0} no longer exists")]
    UserNotInDatabase(i32),

    /// Login with an unknown email or a wrong password.
    #[error("The provided credentials are incorrect.")]
    InvalidCredentials,

    /// Registration with an email that is already taken.
    #[error("Email address is already registered")]
    EmailTaken,

    /// The authenticated user lacks the required role.
    ///
    /// Carries the message returned to the caller
    /// (e.g. "Unauthorized to update orders").
    #[error("{0}")]
    AccessDenied(String),

    /// Hashing or parsing a password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotAuthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotInDatabase(_) => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
            return (status, Json(ErrorDto::new("Internal server error"))).into_response();
        }

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}

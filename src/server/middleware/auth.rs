use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

use entity::user::UserRole;

/// Permission levels checked by [`AuthGuard::require`].
pub enum Permission {
    /// Back-office access: admins and editors.
    Staff,
    /// Administrator-only operations.
    Admin,
}

/// Session-backed authentication guard.
///
/// Controllers construct one per request, then either `require` a permission
/// set (failing the request with 401/403) or ask for the optional
/// `current_user` when anonymous access is allowed (public carts, checkout).
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every requested permission.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user satisfying all permissions
    /// - `Err(AuthError::NotAuthenticated)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !matches!(user.role, UserRole::Admin | UserRole::Editor) {
                        return Err(
                            AuthError::AccessDenied("Staff access required".to_string()).into()
                        );
                    }
                }
                Permission::Admin => {
                    if !matches!(user.role, UserRole::Admin) {
                        return Err(
                            AuthError::AccessDenied("Admin access required".to_string()).into()
                        );
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the session user if one is logged in.
    ///
    /// Used by endpoints that serve both authenticated and anonymous callers;
    /// the cart layer resolves its owner key from this.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The authenticated user
    /// - `Ok(None)` - Anonymous session, or the session user no longer exists
    /// - `Err(AppError)` - Session store or database failure
    pub async fn current_user(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.find_by_id(user_id).await?)
    }
}

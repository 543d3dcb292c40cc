//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a pool handle and `CartConfig` is `Copy`.

use sea_orm::DatabaseConnection;

use crate::server::model::cart::CartConfig;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Cart tunables (tax rate, per-line quantity cap) loaded at startup.
    pub cart: CartConfig,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cart` - Cart configuration derived from the environment
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, cart: CartConfig) -> Self {
        Self { db, cart }
    }
}

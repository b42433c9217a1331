//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds the database connection pool plus the
//! static service metadata reported by the welcome endpoint.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Service name reported by `GET /`.
    pub app_name: String,

    /// Service version reported by `GET /`.
    pub version: String,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_name` - Service name for the welcome endpoint
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, app_name: impl Into<String>) -> Self {
        Self {
            db,
            app_name: app_name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

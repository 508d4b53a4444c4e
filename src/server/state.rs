//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Response cache fronting the list endpoints

use sea_orm::DatabaseConnection;

use crate::server::middleware::cache::ResponseCache;

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ResponseCache` wraps a moka cache (clones share the entries)
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// URL-keyed response cache.
    ///
    /// Controllers call `invalidate_all` after every successful author or book mutation.
    pub cache: ResponseCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Response cache shared with the cache middleware
    pub fn new(db: DatabaseConnection, cache: ResponseCache) -> Self {
        Self { db, cache }
    }
}

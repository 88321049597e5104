//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Both fields are cheap to clone: the database connection is a
//! pool handle and the catalog sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::model::catalog::Catalog;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used for servant lookups.
    pub db: DatabaseConnection,

    /// Catalog loaded at startup.
    ///
    /// Immutable for the lifetime of the process, so handlers read it without locking.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `catalog` - Catalog loaded from `db`
    pub fn new(db: DatabaseConnection, catalog: Catalog) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
        }
    }
}

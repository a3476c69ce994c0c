//! Application state - Dependency injection container.
//!
//! Holds the active repository implementation. Handlers reach storage only
//! through this state, so swapping the storage backend for a test double is
//! a matter of constructing the state differently; handler code never
//! changes. A router cannot be built without a repository, which removes
//! the "no repository configured" failure mode of a mutable global slot.

use std::sync::Arc;

use crate::infra::{BooleanRepository, BooleanStore, Database};

/// Application state containing the active repository (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Boolean repository
    pub booleans: Arc<dyn BooleanRepository>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_database(db: &Database) -> Self {
        Self {
            booleans: Arc::new(BooleanStore::new(db.get_connection())),
        }
    }

    /// Create application state with a manually injected repository.
    ///
    /// Used by tests to substitute a double for the storage-backed
    /// implementation.
    pub fn new(booleans: Arc<dyn BooleanRepository>) -> Self {
        Self { booleans }
    }
}

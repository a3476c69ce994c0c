//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection management and migrations
//! - The storage-backed repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BooleanRepository, BooleanStore};

#[cfg(test)]
pub use repositories::MockBooleanRepository;

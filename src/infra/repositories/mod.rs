//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence, decoupling
//! request handling from storage so a test double can stand in for the
//! database-backed implementation.

mod boolean_repository;
pub(crate) mod entities;

pub use boolean_repository::{BooleanRepository, BooleanStore};

// Export mock for unit tests
#[cfg(test)]
pub use boolean_repository::MockBooleanRepository;

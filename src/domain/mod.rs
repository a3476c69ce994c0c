//! Domain layer - Core entity and wire shapes
//!
//! Contains the `Boolean` entity and its request DTO, independent of
//! infrastructure concerns.

pub mod boolean;

pub use boolean::{Boolean, BooleanInput};

//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod boolean;

// Re-exports for convenience
#[allow(unused_imports)]
pub use boolean::{ActiveModel as BooleanActiveModel, Entity as BooleanEntity, Model as BooleanModel};

//! Boolean-as-a-Service - a named boolean flag over HTTP
//!
//! This crate persists a single resource (a `Boolean`: id, key, value) in a
//! relational store and exposes CRUD semantics over HTTP with a deterministic
//! mapping from storage outcomes to status codes.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entity and wire shapes
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, routes, and application state
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Boolean, BooleanInput};
pub use errors::{AppError, AppResult};

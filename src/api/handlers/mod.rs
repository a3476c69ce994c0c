//! HTTP request handlers.

pub mod boolean_handler;

pub use boolean_handler::boolean_routes;

//! Custom extractors for request parsing.

mod json_body;
mod path_id;

pub use json_body::JsonBody;
pub use path_id::PathId;

//! Centralized error handling.
//!
//! Provides a unified error type for the entire application, with automatic
//! HTTP response conversion. The wire contract conveys the error taxonomy
//! purely through status codes: every error response has an empty body, so
//! no storage or validation detail ever reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed identifier or malformed/mismatched-type request body
    #[error("invalid request: {0}")]
    Validation(String),

    /// No stored record for the given identifier
    #[error("record not found")]
    NotFound,

    /// Storage-layer failure (connectivity, constraint, unknown)
    #[error("database error")]
    Database(#[from] sea_orm::DbErr),

    /// Any other server-side failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server faults are logged; client errors are not server faults.
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Validation(msg) => tracing::debug!("Rejected request: {}", msg),
            AppError::NotFound => {}
        }

        self.status().into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

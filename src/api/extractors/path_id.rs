//! Path identifier extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::errors::AppError;

/// Extracts the `{id}` path parameter as a UUID.
///
/// Runs before any body extractor in the handler signature, so a malformed
/// identifier is rejected ahead of body parsing and before any repository
/// call. Malformed values are a validation failure (400), never a 404.
pub struct PathId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.to_string()))?;

        let id = Uuid::parse_str(&raw)
            .map_err(|e| AppError::validation(format!("invalid identifier '{}': {}", raw, e)))?;

        Ok(PathId(id))
    }
}

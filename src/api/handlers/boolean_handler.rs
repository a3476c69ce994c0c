//! Boolean resource handlers.
//!
//! Each handler is a stateless translation step: wire input to repository
//! call, repository outcome to status code. Error bodies are empty; the
//! taxonomy travels in the status code alone.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathId};
use crate::api::AppState;
use crate::domain::{Boolean, BooleanInput};
use crate::errors::AppResult;

/// Create boolean resource routes
pub fn boolean_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_boolean))
        .route(
            "/:id",
            get(get_boolean)
                .patch(update_boolean)
                .delete(delete_boolean),
        )
}

/// Fetch a boolean by identifier
pub async fn get_boolean(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Boolean>> {
    let boolean = state.booleans.get(id).await?;
    Ok(Json(boolean))
}

/// Create a boolean; the response echoes the stored record with the
/// server-minted identifier attached.
pub async fn create_boolean(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BooleanInput>,
) -> AppResult<Json<Boolean>> {
    let id = state.booleans.create(input.clone()).await?;
    Ok(Json(input.into_boolean(id)))
}

/// Replace a boolean's key and value.
///
/// The response reflects the values just written, composed from the path
/// identifier and the parsed body rather than re-read from storage.
pub async fn update_boolean(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(input): JsonBody<BooleanInput>,
) -> AppResult<Json<Boolean>> {
    state.booleans.update(id, input.clone()).await?;
    Ok(Json(input.into_boolean(id)))
}

/// Delete a boolean by identifier
pub async fn delete_boolean(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<StatusCode> {
    state.booleans.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

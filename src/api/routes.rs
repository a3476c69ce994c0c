//! Application route configuration.

use axum::{http::StatusCode, response::Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::handlers::boolean_routes;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(boolean_routes())
        // Any unmatched route answers with a structured 404 payload,
        // the one error case that carries a body
        .fallback(page_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched-route error payload
#[derive(Serialize)]
struct PageNotFound {
    code: &'static str,
    message: &'static str,
}

/// Catch-all for requests that match no registered route
async fn page_not_found() -> (StatusCode, Json<PageNotFound>) {
    (
        StatusCode::NOT_FOUND,
        Json(PageNotFound {
            code: "PAGE_NOT_FOUND",
            message: "Page not found",
        }),
    )
}

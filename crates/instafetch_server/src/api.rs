//! Routes and handlers for the resolution service.

use crate::response::{ApiError, DownloadResponse};
use crate::Resolver;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// API state shared across handlers.
#[derive(Clone)]
pub struct ApiState {
    resolver: Arc<Resolver>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self { resolver }
    }
}

/// Creates the service router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/download", get(download))
        .with_state(state)
}

/// Liveness line for the bare root.
async fn root() -> impl IntoResponse {
    "InstaFetch API is running."
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    url: Option<String>,
}

/// Resolve a post URL into a directly downloadable media reference.
async fn download(
    State(state): State<ApiState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Json<DownloadResponse>, ApiError> {
    // A missing parameter fails the same pre-filter an invalid one does.
    let url = query.url.unwrap_or_default();
    let result = state.resolver.resolve(&url).await?;
    Ok(Json(DownloadResponse::from(result)))
}

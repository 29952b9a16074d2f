//! HTTP API handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::store::{Album, AlbumStore};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// The album collection.
    pub store: Arc<AlbumStore>,
    /// Rendered by the /metrics endpoint when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state around a freshly seeded store, without a metrics recorder.
    pub fn new() -> Self {
        Self {
            store: Arc::new(AlbumStore::seeded()),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the /metrics endpoint.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Success body carrying a single message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// GET /albums - the full ordered collection.
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    metrics::inc_albums_listed();
    Json(state.store.list().await)
}

/// GET /albums/:id - first album with a matching id, 404 otherwise.
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Album>> {
    let album = state.store.get(&id).await.map_err(|_| {
        warn!(id = %id, "album lookup missed");
        metrics::inc_lookups_missed();
        ApiError::AlbumNotFound
    })?;

    Ok(Json(album))
}

/// POST /albums - append the candidate album exactly as supplied.
pub async fn create_album(
    State(state): State<AppState>,
    body: Result<Json<Album>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(candidate) = body.map_err(|rejection| {
        warn!(%rejection, "album create request had a malformed body");
        metrics::inc_bad_requests();
        ApiError::CreateBadBody
    })?;

    let created = state.store.create(candidate).await;
    metrics::inc_albums_created();

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /albums/:id - replace the first matching album.
///
/// The returned album always carries the path id; the body's id field is
/// discarded.
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Album>, JsonRejection>,
) -> ApiResult<Json<Album>> {
    let Json(replacement) = body.map_err(|rejection| {
        warn!(%rejection, "album update request had a malformed body");
        metrics::inc_bad_requests();
        ApiError::UpdateBadBody
    })?;

    let updated = state.store.update(&id, replacement).await.map_err(|_| {
        warn!(id = %id, "album to update not found");
        metrics::inc_lookups_missed();
        ApiError::UpdateNotFound
    })?;
    metrics::inc_albums_updated();

    Ok(Json(updated))
}

/// DELETE /albums/:id - remove the first matching album.
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.delete(&id).await.map_err(|_| {
        warn!(id = %id, "album to delete not found");
        metrics::inc_lookups_missed();
        ApiError::DeleteNotFound
    })?;
    metrics::inc_albums_deleted();

    Ok(Json(MessageResponse {
        message: "Item deletado com sucesso".to_string(),
    }))
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus metrics handler - 503 until a recorder is installed.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn app_state_starts_with_seed_data() {
        let state = AppState::new();
        assert_eq!(state.store.len().await, 3);
        assert!(state.metrics.is_none());
    }
}

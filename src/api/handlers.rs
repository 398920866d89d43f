use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    view_state::{DetailView, ListingView},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Current listing view
pub async fn listing(State(state): State<AppState>) -> Json<ListingView> {
    let view = state.view.read().await;
    Json(view.listing())
}

/// Run a search and return the resulting listing
///
/// A blank query restores the baseline catalog without calling the backend.
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Json<ListingView> {
    let query = params.q.trim();

    if query.is_empty() {
        tracing::info!(request_id = %request_id, "Empty query, restoring baseline");
        let mut view = state.view.write().await;
        view.restore_baseline(state.content.baseline());
        return Json(view.listing());
    }

    state.view.write().await.begin_search(query);

    tracing::info!(request_id = %request_id, query = %query, "Processing search request");
    let results = state.content.search(query).await;

    let mut view = state.view.write().await;
    view.finish_search(results);
    Json(view.listing())
}

/// Collapse or expand the sidebar
pub async fn toggle_sidebar(State(state): State<AppState>) -> Json<ListingView> {
    let mut view = state.view.write().await;
    view.toggle_sidebar();
    Json(view.listing())
}

/// Open a video and generate its comments
pub async fn watch(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<DetailView>> {
    let video = {
        let mut view = state.view.write().await;
        let video = view.select_video(&id)?;
        view.begin_comments();
        video
    };

    tracing::info!(
        request_id = %request_id,
        video_id = %video.id,
        "Generating comments"
    );
    let comments = state.content.comments_for(&video.title).await;

    let mut view = state.view.write().await;
    if !view.finish_comments(&video.id, comments) {
        tracing::debug!(
            request_id = %request_id,
            video_id = %video.id,
            "Discarded comments for a video that is no longer active"
        );
    }

    Ok(Json(view.detail(video)))
}

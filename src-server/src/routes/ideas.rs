//! Idea catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use sparkdeck_core::{DomainError, Idea, IdeaQuery, PlatformStats};

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/ideas?category=&sort=
pub async fn list_ideas(State(state): State<AppState>, Query(query): Query<IdeaQuery>) -> ApiResult<Json<Vec<Idea>>> {
    let ideas = state.repo.list().await.map_err(|e| state.api_error(e))?;
    let selected = query.apply(&ideas);
    tracing::debug!("list_ideas {:?}: {} of {}", query, selected.len(), ideas.len());
    Ok(Json(selected))
}

/// GET /api/ideas/{id}
pub async fn get_idea(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Json<Idea>> {
    state
        .repo
        .find_by_id(id)
        .await
        .map_err(|e| state.api_error(e))?
        .map(Json)
        .ok_or_else(|| state.api_error(DomainError::NotFound(format!("Idea {} not found", id))))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<PlatformStats>> {
    let ideas = state.repo.list().await.map_err(|e| state.api_error(e))?;
    Ok(Json(PlatformStats::from_ideas(&ideas, Utc::now())))
}

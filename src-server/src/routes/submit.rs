//! Submission and newsletter endpoints
//!
//! Both validate and acknowledge; nothing is persisted.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};
use sparkdeck_core::{Idea, IdeaSubmission, NewsletterSignup};

use crate::error::ApiResult;
use crate::AppState;

/// POST /api/ideas/submit
pub async fn submit_idea(
    State(state): State<AppState>,
    Json(submission): Json<IdeaSubmission>,
) -> ApiResult<(StatusCode, Json<Idea>)> {
    let next_id = state
        .repo
        .list()
        .await
        .map_err(|e| state.api_error(e))?
        .iter()
        .map(|idea| idea.id)
        .max()
        .unwrap_or(0)
        + 1;
    let idea = submission.into_pending(next_id, Utc::now()).map_err(|e| state.api_error(e))?;
    tracing::info!("received idea submission '{}' ({})", idea.title, idea.category);
    Ok((StatusCode::CREATED, Json(idea)))
}

/// POST /api/newsletter/subscribe
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    Json(signup): Json<NewsletterSignup>,
) -> ApiResult<Json<Value>> {
    let signup = NewsletterSignup::new(signup.email);
    signup.validate().map_err(|e| state.api_error(e))?;
    tracing::info!("newsletter subscription for {}", signup.email);
    Ok(Json(json!({
        "success": true,
        "email": signup.email,
        "message": "Thanks for subscribing!",
    })))
}

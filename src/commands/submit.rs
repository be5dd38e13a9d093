//! Submission Requests
//!
//! Unlike catalog reads these propagate failures to the caller.

use serde::Deserialize;
use sparkdeck_core::{Idea, IdeaSubmission, NewsletterSignup};

use super::{ideas::api_url, post_json};

/// POST /ideas/submit; returns the pending record the server echoed
pub async fn submit_idea(submission: &IdeaSubmission) -> Result<Idea, String> {
    submission.validate().map_err(|e| e.to_string())?;
    post_json(&api_url("/ideas/submit"), submission).await
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// POST /newsletter/subscribe
pub async fn subscribe_newsletter(email: &str) -> Result<SubscribeResponse, String> {
    let signup = NewsletterSignup::new(email);
    signup.validate().map_err(|e| e.to_string())?;
    post_json(&api_url("/newsletter/subscribe"), &signup).await
}

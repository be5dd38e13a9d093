//! HTTP Route Handlers
//!
//! Read-only idea API plus the submission/newsletter echo endpoints.

mod health;
mod ideas;
mod submit;

pub use health::health;
pub use ideas::{get_idea, get_stats, list_ideas};
pub use submit::{submit_idea, subscribe_newsletter};

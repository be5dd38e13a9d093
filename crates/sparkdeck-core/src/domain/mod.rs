//! Domain Layer
//!
//! Catalog entities and the rules that apply to them.

mod error;
mod idea;
mod stats;
mod submission;

pub use error::{DomainError, DomainResult};
pub use idea::{category_label, complexity_label, CategoryFilter, Idea, IdeaStatus, SortKey, ViewMode};
pub use stats::{DeckStats, PlatformStats};
pub use submission::{parse_tags, IdeaSubmission, NewsletterSignup};

//! SparkDeck Core
//!
//! Everything the showcase does that is not DOM plumbing:
//! - domain: Idea entity, submissions, stats, errors
//! - store: filtered/sorted idea sequence and the current index
//! - controller: carousel gesture/animation state machine
//! - render: pure projection of the store into view models
//! - deck: application state and command dispatch
//! - cache / catalog: network-layer helpers shared by the UI and the server

pub mod cache;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod controller;
pub mod deck;
pub mod domain;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests;

pub use cache::ResponseCache;
pub use catalog::{fallback_ideas, sample_ideas, IdeaQuery};
pub use clock::{Clock, ManualClock};
pub use config::{DataSource, DeckConfig};
pub use controller::{CarouselController, DragFrame, GestureOutcome, Phase, PointerKind};
pub use deck::{Command, Deck, DispatchOutcome, KeyCommand, ModalState};
pub use domain::{
    CategoryFilter, DeckStats, DomainError, DomainResult, Idea, IdeaStatus, IdeaSubmission,
    NewsletterSignup, PlatformStats, SortKey, ViewMode,
};
pub use store::DataStore;

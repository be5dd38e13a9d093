//! Repository Layer
//!
//! Data access for the idea catalog.

mod json_repo;
mod traits;
mod tests;

pub use json_repo::JsonIdeaRepository;
pub use traits::IdeaRepository;

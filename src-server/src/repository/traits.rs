//! Repository Layer - Core Traits
//!
//! The catalog is read-only; submissions are echoed, never stored.

use async_trait::async_trait;
use sparkdeck_core::{DomainResult, Idea};

#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// All ideas in catalog order
    async fn list(&self) -> DomainResult<Vec<Idea>>;

    /// Find idea by ID
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Idea>> {
        Ok(self.list().await?.into_iter().find(|idea| idea.id == id))
    }
}

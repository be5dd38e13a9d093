//! Idea Repository backed by a JSON file
//!
//! The file is re-read on every call so edits show up without a restart.

use std::path::PathBuf;

use async_trait::async_trait;
use sparkdeck_core::catalog::parse_ideas;
use sparkdeck_core::{DomainError, DomainResult, Idea};

use super::traits::IdeaRepository;

pub struct JsonIdeaRepository {
    path: PathBuf,
}

impl JsonIdeaRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IdeaRepository for JsonIdeaRepository {
    async fn list(&self) -> DomainResult<Vec<Idea>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Internal(format!("reading {}: {}", self.path.display(), e)))?;
        parse_ideas(&raw).map_err(|e| DomainError::Internal(format!("parsing {}: {}", self.path.display(), e)))
    }
}

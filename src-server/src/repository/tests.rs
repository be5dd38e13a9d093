//! Repository Integration Tests
//!
//! JsonIdeaRepository against temporary files.

#[cfg(test)]
mod tests {
    use crate::repository::{IdeaRepository, JsonIdeaRepository};
    use sparkdeck_core::DomainError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(body.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[tokio::test]
    async fn test_list_ideas() {
        let file = write_file(
            r#"[{"id": 1, "title": "One", "category": "ai", "rating": 4.5},
                {"id": 2, "title": "Two", "category": "tech", "rating": 3.0}]"#,
        );
        let repo = JsonIdeaRepository::new(file.path());
        let ideas = repo.list().await.expect("List failed");
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].title, "One");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let file = write_file(r#"[{"id": 7, "title": "Seven", "category": "ai"}]"#);
        let repo = JsonIdeaRepository::new(file.path());
        assert_eq!(repo.find_by_id(7).await.unwrap().map(|i| i.title), Some("Seven".to_string()));
        assert!(repo.find_by_id(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_internal() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonIdeaRepository::new(dir.path().join("nope.json"));
        assert!(matches!(repo.list().await, Err(DomainError::Internal(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_internal() {
        let file = write_file("{ not json");
        let repo = JsonIdeaRepository::new(file.path());
        assert!(matches!(repo.list().await, Err(DomainError::Internal(_))));
    }
}

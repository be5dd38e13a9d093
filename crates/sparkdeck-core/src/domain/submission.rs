//! Visitor Submissions
//!
//! Submitted ideas become pending candidate records; nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::idea::{Idea, IdeaStatus};

/// Raw "submit idea" form contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdeaSubmission {
    pub title: String,
    pub category: String,
    pub complexity: u8,
    pub description: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub url: String,
    /// Comma separated, as typed
    #[serde(default)]
    pub tags: String,
}

impl IdeaSubmission {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput("title is required".into()));
        }
        if self.category.trim().is_empty() || self.category.trim() == "all" {
            return Err(DomainError::InvalidInput("pick a category".into()));
        }
        if !(1..=4).contains(&self.complexity) {
            return Err(DomainError::InvalidInput(format!(
                "complexity must be 1-4, got {}",
                self.complexity
            )));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::InvalidInput("description is required".into()));
        }
        Ok(())
    }

    /// Build the pending candidate record (`rating = 0`, `status = pending`)
    pub fn into_pending(self, id: u32, now: DateTime<Utc>) -> DomainResult<Idea> {
        self.validate()?;
        let mut idea = Idea::new(id, self.title.trim(), self.category.trim());
        idea.complexity = self.complexity;
        idea.description = self.description.trim().to_string();
        idea.problem = non_empty(self.problem);
        idea.solution = non_empty(self.solution);
        idea.demo_url = non_empty(self.url);
        idea.tags = parse_tags(&self.tags);
        idea.rating = 0.0;
        idea.status = IdeaStatus::Pending;
        idea.created_at = Some(now);
        idea.updated_at = Some(now);
        Ok(idea)
    }
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Split a comma separated tag list, dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Newsletter form contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into().trim().to_string() }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let invalid = || DomainError::InvalidInput(format!("'{}' is not a valid email", self.email));
        let (local, domain) = self.email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') || self.email.contains(char::is_whitespace) {
            return Err(invalid());
        }
        match domain.split_once('.') {
            Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => Ok(()),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> IdeaSubmission {
        IdeaSubmission {
            title: "  Plant Doctor ".into(),
            category: "ai".into(),
            complexity: 3,
            description: "Diagnose plants from photos.".into(),
            problem: "".into(),
            solution: "Vision model".into(),
            url: "".into(),
            tags: "AI, Garden, ,Mobile".into(),
        }
    }

    #[test]
    fn test_pending_record() {
        let now = Utc::now();
        let idea = form().into_pending(42, now).unwrap();
        assert_eq!(idea.id, 42);
        assert_eq!(idea.title, "Plant Doctor");
        assert_eq!(idea.status, IdeaStatus::Pending);
        assert_eq!(idea.rating, 0.0);
        assert_eq!(idea.tags, vec!["AI", "Garden", "Mobile"]);
        assert!(idea.problem.is_none());
        assert_eq!(idea.solution.as_deref(), Some("Vision model"));
        assert_eq!(idea.created_at, Some(now));
    }

    #[test]
    fn test_rejects_incomplete_forms() {
        let mut missing_title = form();
        missing_title.title = " ".into();
        assert!(missing_title.validate().is_err());

        let mut bad_complexity = form();
        bad_complexity.complexity = 5;
        assert!(bad_complexity.validate().is_err());

        let mut all_category = form();
        all_category.category = "all".into();
        assert!(all_category.validate().is_err());
    }

    #[test]
    fn test_newsletter_email() {
        assert!(NewsletterSignup::new(" reader@example.com ").validate().is_ok());
        assert!(NewsletterSignup::new("reader@example").validate().is_err());
        assert!(NewsletterSignup::new("@example.com").validate().is_err());
        assert!(NewsletterSignup::new("a@b@example.com").validate().is_err());
        assert!(NewsletterSignup::new("reader example.com").validate().is_err());
    }
}

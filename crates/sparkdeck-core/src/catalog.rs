//! Catalog Sources
//!
//! Bundled sample data, the minimal fallback list, and the filter
//! parameters sent with `/api/ideas` requests.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::domain::{CategoryFilter, DomainResult, Idea, SortKey};
use crate::store::sort_ideas;

const SAMPLE_IDEAS_JSON: &str = include_str!("../../../public/assets/sample-ideas.json");

/// The bundled sample catalog
pub fn sample_ideas() -> DomainResult<Vec<Idea>> {
    parse_ideas(SAMPLE_IDEAS_JSON)
}

pub fn parse_ideas(raw: &str) -> DomainResult<Vec<Idea>> {
    Ok(serde_json::from_str(raw)?)
}

/// Shown when the catalog cannot be loaded at all
pub fn fallback_ideas() -> Vec<Idea> {
    let mut idea = Idea::new(1, "Sample Startup Idea", "tech");
    idea.description = "This is a sample idea loaded from fallback data.".to_string();
    idea.rating = 4.0;
    idea.complexity = 2;
    vec![idea]
}

/// Filter parameters for `/api/ideas`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdeaQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
}

impl IdeaQuery {
    pub fn category_filter(&self) -> CategoryFilter {
        self.category.as_deref().map(CategoryFilter::from).unwrap_or_default()
    }

    /// `ideas_<json params>`
    pub fn cache_key(&self) -> String {
        format!("ideas_{}", serde_json::to_string(self).unwrap_or_default())
    }

    /// URL query string without the leading `?`; empty when unfiltered
    pub fn query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", utf8_percent_encode(category, NON_ALPHANUMERIC)));
        }
        if let Some(sort) = self.sort {
            pairs.push(format!("sort={}", sort.as_str()));
        }
        pairs.join("&")
    }

    /// Filter `ideas` by category; sort only when a key is given, otherwise keep file order
    pub fn apply(&self, ideas: &[Idea]) -> Vec<Idea> {
        let category = self.category_filter();
        let mut matched: Vec<Idea> = ideas.iter().filter(|idea| category.matches(idea)).cloned().collect();
        if let Some(sort) = self.sort {
            sort_ideas(&mut matched, sort);
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        let ideas = sample_ideas().unwrap();
        assert_eq!(ideas.len(), 5);
        let categories: Vec<&str> = ideas.iter().map(|idea| idea.category.as_str()).collect();
        assert_eq!(categories, vec!["saas", "saas", "tech", "ai", "ai"]);
        assert!(ideas.iter().all(|idea| idea.created_at.is_some()));
    }

    #[test]
    fn test_fallback_is_single_idea() {
        let ideas = fallback_ideas();
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].complexity_label(), "Intermediate");
    }

    #[test]
    fn test_query_encoding() {
        assert_eq!(IdeaQuery::default().query_string(), "");
        assert_eq!(IdeaQuery::default().cache_key(), "ideas_{}");
        let query = IdeaQuery {
            category: Some("home & garden".into()),
            sort: Some(SortKey::Rating),
        };
        assert_eq!(query.query_string(), "category=home%20%26%20garden&sort=rating");
        assert_eq!(query.cache_key(), r#"ideas_{"category":"home & garden","sort":"rating"}"#);
    }

    #[test]
    fn test_apply_filters_and_sorts() {
        let ideas = sample_ideas().unwrap();
        let query = IdeaQuery {
            category: Some("ai".into()),
            sort: Some(SortKey::Rating),
        };
        let ids: Vec<u32> = query.apply(&ideas).iter().map(|idea| idea.id).collect();
        assert_eq!(ids, vec![5, 4]);
        let all = IdeaQuery {
            category: Some("all".into()),
            sort: None,
        };
        let ids: Vec<u32> = all.apply(&ideas).iter().map(|idea| idea.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}

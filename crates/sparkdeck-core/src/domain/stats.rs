//! Catalog Statistics

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::idea::Idea;

/// Stats for the currently filtered sequence (stats bar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_ideas: usize,
    pub total_categories: usize,
    /// Mean rating rounded to one decimal, 0.0 when empty
    pub avg_rating: f64,
}

impl DeckStats {
    pub fn from_ideas(ideas: &[Idea]) -> Self {
        let categories: HashSet<&str> = ideas.iter().map(|idea| idea.category.as_str()).collect();
        Self {
            total_ideas: ideas.len(),
            total_categories: categories.len(),
            avg_rating: mean_rating(ideas),
        }
    }

    pub fn avg_rating_label(&self) -> String {
        format!("{:.1}", self.avg_rating)
    }
}

/// Platform-wide stats served by `/api/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_ideas: usize,
    pub total_categories: usize,
    pub avg_rating: f64,
    pub last_updated: DateTime<Utc>,
}

impl PlatformStats {
    pub fn from_ideas(ideas: &[Idea], now: DateTime<Utc>) -> Self {
        let local = DeckStats::from_ideas(ideas);
        let last_updated = ideas
            .iter()
            .filter_map(|idea| idea.updated_at.or(idea.created_at))
            .max()
            .unwrap_or(now);
        Self {
            total_ideas: local.total_ideas,
            total_categories: local.total_categories,
            avg_rating: local.avg_rating,
            last_updated,
        }
    }

    /// Shown when `/api/stats` cannot be reached
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            total_ideas: 25,
            total_categories: 8,
            avg_rating: 4.3,
            last_updated: now,
        }
    }
}

fn mean_rating(ideas: &[Idea]) -> f64 {
    if ideas.is_empty() {
        return 0.0;
    }
    let sum: f64 = ideas.iter().map(|idea| idea.rating).sum();
    // rounds the exact binary value, so 4.35 gives 4.3
    format!("{:.1}", sum / ideas.len() as f64).parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(id: u32, category: &str, rating: f64) -> Idea {
        let mut idea = Idea::new(id, format!("Idea {}", id), category);
        idea.rating = rating;
        idea
    }

    #[test]
    fn test_mean_rounds_binary_halfway_down() {
        // 4.35 is stored as 4.3499999...
        let stats = DeckStats::from_ideas(&[rated(1, "saas", 4.35)]);
        assert_eq!(stats.avg_rating_label(), "4.3");
        assert_eq!(stats.avg_rating, 4.3);
    }

    #[test]
    fn test_empty_stats() {
        let stats = DeckStats::from_ideas(&[]);
        assert_eq!(stats.total_ideas, 0);
        assert_eq!(stats.total_categories, 0);
        assert_eq!(stats.avg_rating_label(), "0.0");
    }

    #[test]
    fn test_mean_rounded_to_one_decimal() {
        let ideas = vec![rated(1, "saas", 4.5), rated(2, "saas", 4.2), rated(3, "tech", 4.8)];
        let stats = DeckStats::from_ideas(&ideas);
        assert_eq!(stats.total_ideas, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.avg_rating_label(), "4.5");
    }

    #[test]
    fn test_platform_stats_uses_latest_update() {
        let now = Utc::now();
        let mut idea = rated(1, "ai", 5.0);
        idea.updated_at = Some(now - chrono::Duration::days(3));
        let stats = PlatformStats::from_ideas(&[idea], now);
        assert_eq!(stats.last_updated, now - chrono::Duration::days(3));
        assert_eq!(PlatformStats::fallback(now).total_ideas, 25);
    }
}

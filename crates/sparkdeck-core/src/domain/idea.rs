//! Idea Entity
//!
//! One catalog entry: a startup concept plus its presentational metadata.
//! Ideas are immutable once loaded; submissions produce new pending records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::DomainError;

/// Default card color when the source omits one
pub const DEFAULT_COLOR: &str = "#6366f1";

/// Review status of an idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    /// Part of the published catalog
    #[default]
    Published,
    /// Submitted by a visitor, awaiting review
    Pending,
}

/// A startup idea as served by `/api/ideas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: u32,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    pub category: String,
    /// 1 (Beginner) to 4 (Expert)
    #[serde(default = "default_complexity")]
    pub complexity: u8,
    /// 0.0 to 5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_complexity() -> u8 {
    1
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Idea {
    /// Minimal idea with every optional field left empty
    pub fn new(id: u32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: String::new(),
            category: category.into(),
            complexity: default_complexity(),
            rating: 0.0,
            description: String::new(),
            problem: None,
            solution: None,
            features: Vec::new(),
            tags: Vec::new(),
            demo_url: None,
            color: default_color(),
            icon: None,
            status: IdeaStatus::Published,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn complexity_label(&self) -> &'static str {
        complexity_label(self.complexity)
    }

    /// Creation date as `M/D/YYYY`, empty when unknown
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.status == IdeaStatus::Pending
    }
}

/// Human label for a complexity level
pub fn complexity_label(level: u8) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Intermediate",
        3 => "Advanced",
        4 => "Expert",
        _ => "Unknown",
    }
}

/// Navigation label for a category key
pub fn category_label(category: &str) -> String {
    match category {
        "all" => "All Ideas".to_string(),
        "saas" => "SaaS".to_string(),
        "ai" => "AI".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Category filter; `all` passes every idea through
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, idea: &Idea) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => idea.category == *category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(raw.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(raw: String) -> Self {
        CategoryFilter::from(raw.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Sort key for the filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// `createdAt` descending
    #[default]
    Newest,
    /// `createdAt` ascending
    Oldest,
    /// `rating` descending
    Rating,
    /// `complexity` ascending
    Complexity,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Rating,
        SortKey::Complexity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Rating => "rating",
            SortKey::Complexity => "complexity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
            SortKey::Rating => "Highest Rated",
            SortKey::Complexity => "Simplest First",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "rating" => Ok(SortKey::Rating),
            "complexity" => Ok(SortKey::Complexity),
            other => Err(DomainError::InvalidInput(format!("unknown sort key '{}'", other))),
        }
    }
}

/// Which representation of the sequence is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Carousel,
    Grid,
}

/// Timestamps arrive either as `YYYY-MM-DD` or RFC 3339; always written back as RFC 3339.
mod timestamp {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", raw))),
        }
    }
}

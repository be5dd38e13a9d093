//! Deck Configuration

use serde::{Deserialize, Serialize};

/// Where the initial catalog comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Bundled sample catalog
    #[default]
    Sample,
    /// One-shot fetch from `{api_base}/ideas`
    Api,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub api_base: String,
    pub data_source: DataSource,
    pub auto_rotate_ms: u64,
    pub animation_ms: u64,
    pub swipe_threshold_px: f64,
    /// Card width plus gap; replaced by the measured width once the track is laid out
    pub item_width_px: f64,
    pub cache_ttl_ms: u64,
    pub enable_analytics: bool,
    pub toast_ms: u64,
    /// `error` | `warn` | `info` | `debug` | `trace`
    pub log_level: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            data_source: DataSource::Sample,
            auto_rotate_ms: 8_000,
            animation_ms: 500,
            swipe_threshold_px: 50.0,
            item_width_px: 350.0,
            cache_ttl_ms: 5 * 60 * 1000,
            enable_analytics: true,
            toast_ms: 4_000,
            log_level: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Parse a partial JSON config; missing keys keep their defaults
    pub fn from_json(raw: &str) -> crate::DomainResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter() {
        let mut config = DeckConfig::default();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DeckConfig::from_json(r#"{"data_source": "api", "auto_rotate_ms": 3000}"#).unwrap();
        assert_eq!(config.data_source, DataSource::Api);
        assert_eq!(config.auto_rotate_ms, 3000);
        assert_eq!(config.animation_ms, 500);
        assert_eq!(config.cache_ttl_ms, 300_000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = DeckConfig::from_json(r#"{"items_per_page": 3, "toast_ms": 1500}"#).unwrap();
        assert_eq!(config.toast_ms, 1500);
        assert_eq!(config, DeckConfig { toast_ms: 1500, ..DeckConfig::default() });
    }
}

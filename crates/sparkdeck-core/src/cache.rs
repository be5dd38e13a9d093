//! Response Cache
//!
//! In-memory cache with a fixed freshness window, keyed by request
//! parameters. Entries past the window are treated as absent.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ResponseCache<V> {
    entries: HashMap<String, Entry<V>>,
    ttl_ms: u64,
}

impl<V: Clone> ResponseCache<V> {
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
        }
    }

    pub fn is_fresh(&self, key: &str, now_ms: u64) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| now_ms.saturating_sub(entry.stored_at_ms) < self.ttl_ms)
    }

    /// Fresh value for `key`, if any
    pub fn get(&self, key: &str, now_ms: u64) -> Option<V> {
        if !self.is_fresh(key, now_ms) {
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V, now_ms: u64) {
        self.entries.insert(
            key.into(),
            Entry {
                value,
                stored_at_ms: now_ms,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_MINUTES: u64 = 5 * 60 * 1000;

    #[test]
    fn test_fresh_within_window() {
        let mut cache = ResponseCache::new(FIVE_MINUTES);
        cache.insert("stats", 42, 1_000);
        assert_eq!(cache.get("stats", 1_000), Some(42));
        assert_eq!(cache.get("stats", 1_000 + FIVE_MINUTES - 1), Some(42));
        assert_eq!(cache.get("stats", 1_000 + FIVE_MINUTES), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = ResponseCache::new(FIVE_MINUTES);
        cache.insert("ideas_{}", "all", 0);
        cache.insert(r#"ideas_{"category":"ai"}"#, "ai", 0);
        assert_eq!(cache.get("ideas_{}", 10), Some("all"));
        assert_eq!(cache.get(r#"ideas_{"category":"ai"}"#, 10), Some("ai"));
        assert_eq!(cache.get("ideas_x", 10), None);
    }

    #[test]
    fn test_reinsert_refreshes_and_clear_empties() {
        let mut cache = ResponseCache::new(FIVE_MINUTES);
        cache.insert("k", 1, 0);
        cache.insert("k", 2, FIVE_MINUTES);
        assert_eq!(cache.get("k", FIVE_MINUTES + 10), Some(2));
        cache.clear();
        assert!(cache.is_empty());
    }
}

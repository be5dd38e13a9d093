//! Catalog Requests
//!
//! `/ideas` and `/stats` reads behind a TTL cache. Failures are logged and
//! answered with fallback data so the deck always has something to show.

use std::cell::RefCell;

use chrono::Utc;
use sparkdeck_core::{fallback_ideas, Clock, DeckConfig, Idea, IdeaQuery, PlatformStats, ResponseCache};

use super::get_json;
use crate::store::BrowserClock;

const STATS_KEY: &str = "stats";

struct ApiClient {
    base: String,
    ideas: ResponseCache<Vec<Idea>>,
    stats: ResponseCache<PlatformStats>,
}

impl ApiClient {
    fn new(config: &DeckConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            ideas: ResponseCache::new(config.cache_ttl_ms),
            stats: ResponseCache::new(config.cache_ttl_ms),
        }
    }
}

thread_local! {
    static CLIENT: RefCell<ApiClient> = RefCell::new(ApiClient::new(&DeckConfig::default()));
}

/// Point the client at `config.api_base` with `config.cache_ttl_ms`
pub fn configure_client(config: &DeckConfig) {
    CLIENT.with(|client| *client.borrow_mut() = ApiClient::new(config));
}

pub(super) fn api_url(path: &str) -> String {
    CLIENT.with(|client| format!("{}{}", client.borrow().base, path))
}

/// GET /ideas, served from cache while fresh
pub async fn fetch_ideas(query: &IdeaQuery) -> Vec<Idea> {
    let key = query.cache_key();
    let now = BrowserClock.now_ms();
    if let Some(hit) = CLIENT.with(|client| client.borrow().ideas.get(&key, now)) {
        log::debug!("ideas cache hit for {}", key);
        return hit;
    }

    let qs = query.query_string();
    let url = if qs.is_empty() {
        api_url("/ideas")
    } else {
        api_url(&format!("/ideas?{}", qs))
    };

    match get_json::<Vec<Idea>>(&url).await {
        Ok(ideas) => {
            log::info!("fetched {} ideas", ideas.len());
            CLIENT.with(|client| {
                client.borrow_mut().ideas.insert(key, ideas.clone(), BrowserClock.now_ms());
            });
            ideas
        }
        Err(e) => {
            log::warn!("error fetching ideas: {}", e);
            fallback_ideas()
        }
    }
}

/// GET /stats, served from cache while fresh
pub async fn fetch_stats() -> PlatformStats {
    let now = BrowserClock.now_ms();
    if let Some(hit) = CLIENT.with(|client| client.borrow().stats.get(STATS_KEY, now)) {
        return hit;
    }

    match get_json::<PlatformStats>(&api_url("/stats")).await {
        Ok(stats) => {
            CLIENT.with(|client| {
                client.borrow_mut().stats.insert(STATS_KEY, stats.clone(), BrowserClock.now_ms());
            });
            stats
        }
        Err(e) => {
            log::warn!("error fetching stats: {}", e);
            PlatformStats::fallback(Utc::now())
        }
    }
}

/// Drop every cached response
pub fn clear_cache() {
    CLIENT.with(|client| {
        let mut client = client.borrow_mut();
        client.ideas.clear();
        client.stats.clear();
    });
    log::debug!("response cache cleared");
}

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use crate::models::{CategoryResponse, TitleResponse};

// Source of "now" for TTL checks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// What a cache slot holds. Both operations share one map.
#[derive(Clone, Debug, PartialEq)]
pub enum CachedResponse {
    Title(TitleResponse),
    Category(CategoryResponse),
}

// Cache entry with timestamp
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub value: CachedResponse,
    pub stored_at: DateTime<Utc>,
}

// Key for /fix-title
pub fn title_key(title: &str, model: &str) -> String {
    format!("{}:{}", title, model)
}

// Key for /classify-title
pub fn category_key(title: &str, model: &str) -> String {
    format!("category_{}:{}", title, model)
}

// Response cache keyed by `title:model` strings.
//
// Entries are never evicted. A stale entry stays in the map until the next
// successful lookup for the same key overwrites it, so the map grows with
// the number of distinct titles seen.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    pub fn put(&self, key: String, value: CachedResponse) {
        let stored_at = self.clock.now();
        self.entries.insert(key, CacheEntry { value, stored_at });
    }

    // Value for key if it was stored less than one TTL ago
    pub fn fresh(&self, key: &str) -> Option<CachedResponse> {
        let entry = self.get(key)?;
        if self.is_fresh(&entry) {
            Some(entry.value)
        } else {
            None
        }
    }

    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.clock.now() - entry.stored_at < self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // Clock that only moves when told to
    pub(crate) struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        pub(crate) fn new() -> Self {
            Self {
                now: Mutex::new(Utc::now()),
            }
        }

        pub(crate) fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += TimeDelta::from_std(by).unwrap();
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn title(factual: &str) -> CachedResponse {
        CachedResponse::Title(TitleResponse {
            original: "orig".into(),
            factual: factual.into(),
            processing_time: 0.5,
        })
    }

    fn cache_with_clock(ttl_secs: u64) -> (ResponseCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = ResponseCache::new(Duration::from_secs(ttl_secs), clock.clone());
        (cache, clock)
    }

    #[test]
    fn key_namespaces_do_not_collide() {
        assert_eq!(title_key("X", "m1"), "X:m1");
        assert_eq!(category_key("X", "m1"), "category_X:m1");
        assert_ne!(title_key("X", "m1"), category_key("X", "m1"));
    }

    #[test]
    fn prefixed_title_lands_on_category_slot() {
        // the prefix is not escaped, so a title that itself starts with
        // "category_" shares a slot with the classification of the rest
        assert_eq!(title_key("category_X", "m1"), category_key("X", "m1"));
    }

    #[test]
    fn keys_are_not_normalized() {
        assert_ne!(title_key("Cats", "m"), title_key("cats", "m"));
    }

    #[test]
    fn fresh_within_ttl() {
        let (cache, clock) = cache_with_clock(60);
        cache.put("k".into(), title("a"));
        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.fresh("k"), Some(title("a")));
    }

    #[test]
    fn stale_entry_is_ignored_but_kept() {
        let (cache, clock) = cache_with_clock(60);
        cache.put("k".into(), title("a"));
        clock.advance(Duration::from_secs(60));
        assert_eq!(cache.fresh("k"), None);
        assert!(cache.get("k").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_overwrites_and_restamps() {
        let (cache, clock) = cache_with_clock(60);
        cache.put("k".into(), title("a"));
        clock.advance(Duration::from_secs(120));
        cache.put("k".into(), title("b"));
        assert_eq!(cache.fresh("k"), Some(title("b")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn missing_key() {
        let (cache, _) = cache_with_clock(60);
        assert!(cache.get("nope").is_none());
        assert!(cache.fresh("nope").is_none());
    }
}

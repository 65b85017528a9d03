//! Bounded URL memoization cache.

use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::{debug, trace};

/// Insertion-ordered bounded map from lookup key to resolved URL.
///
/// Lookups go through `peek` and never promote an entry, so the
/// underlying LRU order stays pure insertion order and eviction is
/// FIFO: once at capacity, inserting a new key drops the oldest
/// inserted entry.
pub struct BoundedUrlCache {
    entries: LruCache<String, String>,
}

impl BoundedUrlCache {
    /// Creates a cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
        }
    }

    /// Returns the cached URL for `key` without touching eviction order.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        let hit = self.entries.peek(key);
        if hit.is_some() {
            trace!(key, "URL cache hit");
        }
        hit
    }

    /// Returns true if `key` is currently cached.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.peek(key).is_some()
    }

    /// Inserts an entry, evicting the oldest inserted one at capacity.
    pub fn insert_with_eviction(&mut self, key: String, url: String) {
        // push reports the displaced pair; same-key overwrites are not
        // evictions and stay unlogged.
        if let Some((evicted, _)) = self.entries.push(key.clone(), url)
            && evicted != key
        {
            debug!(key = %evicted, "Evicted oldest URL cache entry");
        }
    }

    /// Current number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries before eviction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for BoundedUrlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedUrlCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with(capacity: usize, keys: &[&str]) -> BoundedUrlCache {
        let mut cache = BoundedUrlCache::new(capacity);
        for key in keys {
            cache.insert_with_eviction((*key).to_string(), (*key).to_string());
        }
        cache
    }

    #[test]
    fn never_exceeds_capacity() {
        let cache = cache_with(2, &["a", "b", "c", "d"]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicts_oldest_inserted_first() {
        let cache = cache_with(2, &["a", "b", "c"]);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn lookups_do_not_promote() {
        let mut cache = cache_with(2, &["a", "b"]);

        // A read of "a" must not save it from eviction.
        assert!(cache.get("a").is_some());
        cache.insert_with_eviction("c".to_string(), "c".to_string());

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
    }

    #[test]
    fn fifty_first_entry_evicts_the_first() {
        let mut cache = BoundedUrlCache::new(50);
        for i in 0..50 {
            cache.insert_with_eviction(format!("url-{i}"), format!("url-{i}"));
        }
        assert!(cache.contains("url-0"));

        cache.insert_with_eviction("url-50".to_string(), "url-50".to_string());
        assert_eq!(cache.len(), 50);
        assert!(!cache.contains("url-0"));
        assert!(cache.contains("url-1"));
        assert!(cache.contains("url-50"));
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = cache_with(4, &["a", "b"]);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let cache = cache_with(0, &["a"]);
        assert_eq!(cache.capacity(), 1);
        assert!(cache.contains("a"));
    }
}

//! Unit tests for the shared matcher cache
//!
//! Insertion, LRU eviction, hit/miss accounting, and explicit removal.

#[cfg(test)]
mod cache_tests {
    use std::sync::Arc;
    use url_template_matcher::MatcherCache;

    #[test]
    fn test_cache_insertion() {
        let mut cache = MatcherCache::new();
        let matcher = cache.get_or_insert("https://{sub}.example.com/");
        assert_eq!(matcher.pattern(), "https://{sub}.example.com/");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("https://{sub}.example.com/"));
    }

    #[test]
    fn test_cache_eviction() {
        let mut cache = MatcherCache::with_capacity(3);
        for pattern in ["/a", "/b", "/c", "/d"] {
            cache.get_or_insert(pattern);
        }
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains("/a"));
        assert!(cache.contains("/d"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_cache_hit_miss() {
        let mut cache = MatcherCache::new();
        let first = cache.get_or_insert("/users/{id}");
        let second = cache.get("/users/{id}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.get("/orders/{id}").is_none());

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);

        cache.reset_stats();
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cached_matcher_is_compiled_once() {
        let mut cache = MatcherCache::new();
        let matcher = cache.get_or_insert("/users/{id}");
        assert!(matcher.matches("/users/1").unwrap());

        let again = cache.get_or_insert("/users/{id}");
        let first = matcher.templates().unwrap() as *const _;
        let second = again.templates().unwrap() as *const _;
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_removal() {
        let mut cache = MatcherCache::new();
        cache.get_or_insert("/a");
        let removed = cache.remove("/a").unwrap();
        assert_eq!(removed.pattern(), "/a");
        assert!(cache.is_empty());
    }
}

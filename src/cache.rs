//! Shared matcher cache.
//!
//! Page-object layers typically declare one URL pattern per page and check
//! it over and over. [`MatcherCache`] keeps compiled [`UrlMatcher`]s keyed by
//! pattern so each pattern is compiled once, with LRU eviction once the
//! capacity is reached. It is gated behind the `cache` feature flag and uses
//! the [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses, and evictions.
//!
//! # Examples
//!
//! ```
//! use url_template_matcher::cache::MatcherCache;
//!
//! let mut cache = MatcherCache::new();
//! let matcher = cache.get_or_insert("/users/{id}");
//! assert!(matcher.matches("/users/7").unwrap());
//!
//! let again = cache.get_or_insert("/users/{id}");
//! assert!(std::sync::Arc::ptr_eq(&matcher, &again));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::matcher::UrlMatcher;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Counters tracking cache effectiveness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a matcher.
    pub hits: usize,
    /// Lookups that had to build a matcher.
    pub misses: usize,
    /// Matchers dropped to make room for new ones.
    pub evictions: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of matchers keyed by pattern.
#[derive(Debug)]
pub struct MatcherCache {
    matchers: LruCache<String, Arc<UrlMatcher>>,
    stats: CacheStats,
}

impl MatcherCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache holding up to 256 matchers.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity. Zero is clamped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            matchers: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Return the matcher for `pattern`, creating it on a miss.
    ///
    /// The matcher is created lazily, so an invalid pattern is cached as
    /// well and reports its error when used.
    pub fn get_or_insert(&mut self, pattern: &str) -> Arc<UrlMatcher> {
        if let Some(matcher) = self.matchers.get(pattern) {
            self.stats.hits += 1;
            trace_log!("Matcher cache hit for pattern '{}'", pattern);
            return Arc::clone(matcher);
        }

        self.stats.misses += 1;
        trace_log!("Matcher cache miss for pattern '{}'", pattern);
        let matcher = Arc::new(UrlMatcher::new(pattern));
        if let Some((evicted, _)) = self.matchers.push(pattern.to_string(), Arc::clone(&matcher)) {
            if evicted != pattern {
                self.stats.evictions += 1;
                debug_log!("Evicted matcher for pattern '{}'", evicted);
            }
        }
        matcher
    }

    /// Look up a cached matcher without creating one.
    pub fn get(&mut self, pattern: &str) -> Option<Arc<UrlMatcher>> {
        let found = self.matchers.get(pattern).cloned();
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    /// Return `true` if `pattern` is cached. Does not touch LRU order or stats.
    pub fn contains(&self, pattern: &str) -> bool {
        self.matchers.contains(pattern)
    }

    /// Drop the matcher for `pattern`.
    pub fn remove(&mut self, pattern: &str) -> Option<Arc<UrlMatcher>> {
        self.matchers.pop(pattern)
    }

    /// Drop every cached matcher. Statistics are kept.
    pub fn clear(&mut self) {
        debug_log!(
            "Clearing matcher cache: {} entries removed (hit rate: {:.1}%)",
            self.matchers.len(),
            self.stats.hit_rate() * 100.0
        );
        self.matchers.clear();
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Maximum number of cached matchers.
    pub fn capacity(&self) -> usize {
        self.matchers.cap().get()
    }
}

impl Default for MatcherCache {
    fn default() -> Self {
        Self::new()
    }
}

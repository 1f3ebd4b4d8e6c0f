//! In-process TTL cache for trending query results
//!
//! Memoizes the enriched, viewer-independent ranked list for a short TTL so
//! repeated identical requests skip the candidate fetch and scoring pass.
//! Cache keys follow the pattern:
//! - trending:{limit}:{kind|all} → serialized ranked list
//!
//! Staleness within the TTL is an accepted tradeoff, not a bug: trending
//! order changes slowly relative to request rate. Entries are evicted lazily
//! when a read finds them expired; a racing `put` for the same key is
//! last-write-wins, which is harmless because both writers computed from the
//! same candidate set within the same narrow time window.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{ContentKind, RankedPost};

/// Time source for the cache, injected so tests can simulate expiry
/// without real delays.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Cached, viewer-independent trending payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedTrending {
    pub items: Vec<RankedPost>,
    pub updated_at: DateTime<Utc>,
}

struct CacheEntry {
    payload: CachedTrending,
    computed_at: DateTime<Utc>,
}

/// TTL-bounded result cache keyed by query shape.
pub struct ResultCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Box<dyn Clock>,
}

impl ResultCache {
    pub fn new(ttl_secs: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
            clock,
        }
    }

    /// Build the cache key from exactly the parameters that affect the
    /// viewer-independent result shape. Viewer identity must never appear
    /// here: personalization is applied after the cache read.
    pub fn key(limit: usize, kind: Option<ContentKind>) -> String {
        match kind {
            Some(kind) => format!("trending:{}:{}", limit, kind.as_str()),
            None => format!("trending:{}:all", limit),
        }
    }

    /// Look up a fresh entry, returning the payload and its age in seconds.
    ///
    /// An expired entry reads as absent and is evicted on this miss path.
    /// Any internal fault degrades to a miss, never to an error.
    pub fn get(&self, key: &str) -> Option<(CachedTrending, u64)> {
        let now = self.clock.now();

        {
            let entries = match self.entries.read() {
                Ok(guard) => guard,
                Err(e) => {
                    warn!("Trending cache read lock poisoned, treating as miss: {}", e);
                    return None;
                }
            };

            if let Some(entry) = entries.get(key) {
                let age = now - entry.computed_at;
                if age < self.ttl {
                    debug!("Trending cache hit: {}", key);
                    return Some((entry.payload.clone(), age.num_seconds().max(0) as u64));
                }
            } else {
                debug!("Trending cache miss: {}", key);
                return None;
            }
        }

        // Entry exists but is stale: evict it so dead keys do not accumulate.
        if let Ok(mut entries) = self.entries.write() {
            let stale = entries
                .get(key)
                .map(|entry| now - entry.computed_at >= self.ttl)
                .unwrap_or(false);
            if stale {
                entries.remove(key);
                debug!("Trending cache evicted expired entry: {}", key);
            }
        }

        None
    }

    /// Store a payload, unconditionally overwriting any existing entry.
    pub fn put(&self, key: &str, payload: CachedTrending) {
        let computed_at = self.clock.now();

        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), CacheEntry { payload, computed_at });
                debug!("Cached trending result: {}", key);
            }
            Err(e) => {
                warn!("Trending cache write lock poisoned, dropping entry: {}", e);
            }
        }
    }
}

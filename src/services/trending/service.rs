/// Trending Service
///
/// Orchestrates the trending pipeline: result cache lookup, candidate fetch,
/// velocity scoring, and post-cache viewer personalization.
use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::cache::{CachedTrending, Clock, ResultCache};
use crate::config::TrendingConfig;
use crate::db::{ContentStore, IdentityResolver, ViewerFlags};
use crate::error::Result;
use crate::metrics::{TRENDING_CACHE_EVENTS, TRENDING_CANDIDATE_COUNT};
use crate::models::{ContentKind, RankedPost, TrendingPost};
use crate::services::trending::scoring::{clamp_limit, rank_candidates};

/// Trending response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub items: Vec<TrendingPost>,
    pub count: usize,
    pub kind: Option<String>,
    /// Whether the ranked core was served from the result cache.
    pub cached: bool,
    /// Age of the cache entry in seconds (0 when freshly computed).
    pub cache_age_secs: u64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Trending service
pub struct TrendingService {
    store: Arc<dyn ContentStore>,
    resolver: Arc<dyn IdentityResolver>,
    cache: Arc<ResultCache>,
    clock: Arc<dyn Clock>,
    config: TrendingConfig,
}

impl TrendingService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        resolver: Arc<dyn IdentityResolver>,
        cache: Arc<ResultCache>,
        clock: Arc<dyn Clock>,
        config: TrendingConfig,
    ) -> Self {
        Self {
            store,
            resolver,
            cache,
            clock,
            config,
        }
    }

    /// Get the trending page for a query shape, personalized for `viewer_id`
    /// when present.
    ///
    /// Only the viewer-independent ranked core is cached; `liked`/`saved`
    /// flags are applied after the cache read on every request, so a cache
    /// hit for one viewer is valid for all viewers.
    pub async fn get_trending(
        &self,
        limit: usize,
        kind: Option<ContentKind>,
        viewer_id: Option<Uuid>,
    ) -> Result<TrendingResponse> {
        let limit = clamp_limit(limit);
        let cache_key = ResultCache::key(limit, kind);

        let (core, cached, cache_age_secs) = match self.cache.get(&cache_key) {
            Some((payload, age)) => {
                TRENDING_CACHE_EVENTS.with_label_values(&["hit"]).inc();
                (payload, true, age)
            }
            None => {
                TRENDING_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                let payload = self.compute_trending(limit, kind).await?;
                self.cache.put(&cache_key, payload.clone());
                (payload, false, 0)
            }
        };

        let items = self.personalize(core.items, viewer_id).await;

        Ok(TrendingResponse {
            count: items.len(),
            items,
            kind: kind.map(|k| k.as_str().to_string()),
            cached,
            cache_age_secs,
            updated_at: core.updated_at,
        })
    }

    /// Fetch candidates and run the velocity ranking pass.
    async fn compute_trending(
        &self,
        limit: usize,
        kind: Option<ContentKind>,
    ) -> Result<CachedTrending> {
        let candidates = self
            .store
            .fetch_candidates(kind, self.config.candidate_pool_size)
            .await?;

        TRENDING_CANDIDATE_COUNT.observe(candidates.len() as f64);
        debug!(
            "Scoring {} trending candidates (kind={:?}, limit={})",
            candidates.len(),
            kind,
            limit
        );

        let now = self.clock.now();
        let window = Duration::hours(self.config.freshness_window_hours as i64);
        let ranked = rank_candidates(candidates, limit, now, window);

        Ok(CachedTrending {
            items: ranked.into_iter().map(RankedPost::from).collect(),
            updated_at: now,
        })
    }

    /// Apply viewer-specific flags to the ranked core.
    ///
    /// A resolver failure degrades to all-false flags rather than failing
    /// the request.
    async fn personalize(
        &self,
        items: Vec<RankedPost>,
        viewer_id: Option<Uuid>,
    ) -> Vec<TrendingPost> {
        let flags = match viewer_id {
            Some(viewer) if !items.is_empty() => {
                let post_ids: Vec<Uuid> = items.iter().map(|p| p.id).collect();
                match self.resolver.engagement_flags(viewer, &post_ids).await {
                    Ok(flags) => flags,
                    Err(e) => {
                        warn!(
                            "Personalization lookup failed for viewer {}, serving unflagged results: {}",
                            viewer, e
                        );
                        ViewerFlags::default()
                    }
                }
            }
            _ => ViewerFlags::default(),
        };

        items
            .into_iter()
            .map(|post| {
                let liked = flags.liked.contains(&post.id);
                let saved = flags.saved.contains(&post.id);
                post.with_flags(liked, saved)
            })
            .collect()
    }
}

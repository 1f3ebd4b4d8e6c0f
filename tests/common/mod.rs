//! In-memory test doubles for the trending service ports.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use trending_service::cache::Clock;
use trending_service::db::{ContentStore, IdentityResolver, ViewerFlags};
use trending_service::error::{AppError, Result};
use trending_service::models::{ContentItem, ContentKind};

/// Deterministic, manually advanced clock shared between test and service.
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Content store fake serving a fixed candidate list and counting fetches.
pub struct InMemoryContentStore {
    candidates: Mutex<Vec<ContentItem>>,
    pub fetch_count: AtomicUsize,
}

impl InMemoryContentStore {
    pub fn new(candidates: Vec<ContentItem>) -> Self {
        Self {
            candidates: Mutex::new(candidates),
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn replace(&self, candidates: Vec<ContentItem>) {
        *self.candidates.lock().unwrap() = candidates;
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn fetch_candidates(
        &self,
        kind: Option<ContentKind>,
        pool_size: i64,
    ) -> Result<Vec<ContentItem>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        let items = self.candidates.lock().unwrap().clone();
        Ok(items
            .into_iter()
            .filter(|item| kind.map(|k| item.kind == k).unwrap_or(true))
            .take(pool_size as usize)
            .collect())
    }
}

/// Content store fake that always fails, for propagation tests.
pub struct FailingContentStore;

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn fetch_candidates(
        &self,
        _kind: Option<ContentKind>,
        _pool_size: i64,
    ) -> Result<Vec<ContentItem>> {
        Err(AppError::Database("connection refused".to_string()))
    }
}

/// Identity resolver fake with fixed liked/saved sets and a call counter.
#[derive(Default)]
pub struct StaticIdentityResolver {
    pub liked: HashSet<Uuid>,
    pub saved: HashSet<Uuid>,
    pub call_count: AtomicUsize,
}

impl StaticIdentityResolver {
    pub fn new(liked: HashSet<Uuid>, saved: HashSet<Uuid>) -> Self {
        Self {
            liked,
            saved,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn engagement_flags(&self, _viewer_id: Uuid, post_ids: &[Uuid]) -> Result<ViewerFlags> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let requested: HashSet<Uuid> = post_ids.iter().copied().collect();
        Ok(ViewerFlags {
            liked: self.liked.intersection(&requested).copied().collect(),
            saved: self.saved.intersection(&requested).copied().collect(),
        })
    }
}

/// Identity resolver fake that always fails, for degradation tests.
pub struct FailingIdentityResolver;

#[async_trait]
impl IdentityResolver for FailingIdentityResolver {
    async fn engagement_flags(&self, _viewer_id: Uuid, _post_ids: &[Uuid]) -> Result<ViewerFlags> {
        Err(AppError::Database("identity lookup timed out".to_string()))
    }
}

/// Build a candidate post at a given age with the given counters.
pub fn post(
    marker: &str,
    kind: ContentKind,
    age_hours: i64,
    likes: i64,
    comments: i64,
    shares: i64,
    now: DateTime<Utc>,
) -> ContentItem {
    ContentItem {
        id: Uuid::new_v4(),
        author_id: Uuid::new_v4(),
        author_username: Some(format!("{}_farmer", marker)),
        author_display_name: None,
        author_avatar_url: None,
        body: marker.to_string(),
        kind,
        media_urls: vec![],
        like_count: likes,
        comment_count: comments,
        share_count: shares,
        created_at: now - Duration::hours(age_hours),
    }
}

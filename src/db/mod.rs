//! Data access ports for the trending service
//!
//! The calculator core never does I/O; these traits are the seams to the
//! content store and to viewer identity resolution, with Postgres
//! implementations behind them.

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ContentItem, ContentKind};

pub mod content_repo;
pub mod viewer_repo;

pub use content_repo::PgContentStore;
pub use viewer_repo::PgIdentityResolver;

/// Source of trending candidates.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch the most recent published posts, author fields included, as the
    /// candidate pool for scoring. `pool_size` is an efficiency bound on how
    /// far back the pool reaches; the freshness window itself is applied by
    /// the calculator, not here.
    async fn fetch_candidates(
        &self,
        kind: Option<ContentKind>,
        pool_size: i64,
    ) -> Result<Vec<ContentItem>>;
}

/// Per-viewer engagement lookups for `liked`/`saved` response flags.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn engagement_flags(&self, viewer_id: Uuid, post_ids: &[Uuid]) -> Result<ViewerFlags>;
}

/// Which of the ranked posts a viewer has liked or saved.
#[derive(Debug, Default, Clone)]
pub struct ViewerFlags {
    pub liked: HashSet<Uuid>,
    pub saved: HashSet<Uuid>,
}

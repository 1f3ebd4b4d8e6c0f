use async_trait::async_trait;
/// Viewer Repository
///
/// Postgres lookups for per-viewer liked/saved flags
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::db::{IdentityResolver, ViewerFlags};
use crate::error::{AppError, Result};

/// Postgres implementation of the identity resolver port.
pub struct PgIdentityResolver {
    pool: PgPool,
}

impl PgIdentityResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityResolver for PgIdentityResolver {
    async fn engagement_flags(&self, viewer_id: Uuid, post_ids: &[Uuid]) -> Result<ViewerFlags> {
        if post_ids.is_empty() {
            return Ok(ViewerFlags::default());
        }

        let liked = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT post_id
            FROM post_likes
            WHERE user_id = $1 AND post_id = ANY($2)
            "#,
        )
        .bind(viewer_id)
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch liked posts for viewer {}: {}", viewer_id, e);
            AppError::Database(e.to_string())
        })?
        .into_iter()
        .collect();

        let saved = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT post_id
            FROM post_saves
            WHERE user_id = $1 AND post_id = ANY($2)
            "#,
        )
        .bind(viewer_id)
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch saved posts for viewer {}: {}", viewer_id, e);
            AppError::Database(e.to_string())
        })?
        .into_iter()
        .collect();

        Ok(ViewerFlags { liked, saved })
    }
}

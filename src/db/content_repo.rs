use async_trait::async_trait;
/// Content Repository
///
/// Postgres-backed candidate fetch for the trending calculator
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::db::ContentStore;
use crate::error::{AppError, Result};
use crate::models::{ContentItem, ContentKind};

/// Postgres implementation of the content store port.
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn fetch_candidates(
        &self,
        kind: Option<ContentKind>,
        pool_size: i64,
    ) -> Result<Vec<ContentItem>> {
        let rows = sqlx::query_as::<
            _,
            (
                Uuid,                          // id
                Uuid,                          // author_id
                Option<String>,                // author_username
                Option<String>,                // author_display_name
                Option<String>,                // author_avatar_url
                String,                        // body
                String,                        // kind
                Vec<String>,                   // media_urls
                i64,                           // like_count
                i64,                           // comment_count
                i64,                           // share_count
                chrono::DateTime<chrono::Utc>, // created_at
            ),
        >(
            r#"
            SELECT
                p.id,
                p.user_id,
                u.username,
                u.display_name,
                u.avatar_url,
                p.body,
                p.kind,
                COALESCE(p.media_urls, '{}') AS media_urls,
                p.like_count,
                p.comment_count,
                p.share_count,
                p.created_at
            FROM posts p
            JOIN users u ON p.user_id = u.id
            WHERE p.deleted_at IS NULL
                AND ($1::VARCHAR IS NULL OR p.kind = $1)
            ORDER BY p.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(kind.map(|k| k.as_str().to_string()))
        .bind(pool_size)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch trending candidates: {}", e);
            AppError::Database(e.to_string())
        })?
        .into_iter()
        .map(
            |(
                id,
                author_id,
                author_username,
                author_display_name,
                author_avatar_url,
                body,
                kind,
                media_urls,
                like_count,
                comment_count,
                share_count,
                created_at,
            )| {
                ContentItem {
                    id,
                    author_id,
                    author_username,
                    author_display_name,
                    author_avatar_url,
                    body,
                    // Unknown kinds in older rows fall back to the plain post kind.
                    kind: ContentKind::parse(&kind).unwrap_or(ContentKind::Post),
                    media_urls,
                    like_count,
                    comment_count,
                    share_count,
                    created_at,
                }
            },
        )
        .collect();

        Ok(rows)
    }
}

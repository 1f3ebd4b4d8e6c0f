/// Trending/Discovery API Handlers
///
/// HTTP endpoints for trending content discovery
use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::ContentKind;
use crate::services::trending::{TrendingService, DEFAULT_LIMIT};

/// Query parameters for GET /trending
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    /// Page size (default: 10, silently clamped to 1..=50)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Content kind filter: "post", "question", "market" (optional)
    pub kind: Option<String>,

    /// Viewer identity for liked/saved flags (optional, never affects ranking)
    pub viewer_id: Option<String>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Trending handler state
pub struct TrendingHandlerState {
    pub service: Arc<TrendingService>,
}

/// GET /api/v1/trending
///
/// Get trending content across all kinds or filtered by kind
#[get("/api/v1/trending")]
pub async fn get_trending(
    query: web::Query<TrendingQuery>,
    state: web::Data<TrendingHandlerState>,
) -> Result<HttpResponse> {
    debug!(
        "Trending request: limit={}, kind={:?}, viewer_id={:?}",
        query.limit, query.kind, query.viewer_id
    );

    let kind = query.kind.as_deref().map(parse_kind).transpose()?;
    let viewer_id = query.viewer_id.as_deref().map(parse_viewer_id).transpose()?;

    let response = state
        .service
        .get_trending(query.limit, kind, viewer_id)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/trending/kinds
///
/// Enumerate the content kinds available as trending filters
#[get("/api/v1/trending/kinds")]
pub async fn get_trending_kinds() -> HttpResponse {
    #[derive(Serialize)]
    struct Kind {
        name: String,
        label: String,
    }

    let kinds = vec![
        Kind {
            name: "post".to_string(),
            label: "Posts".to_string(),
        },
        Kind {
            name: "question".to_string(),
            label: "Questions".to_string(),
        },
        Kind {
            name: "market".to_string(),
            label: "Marketplace".to_string(),
        },
    ];

    HttpResponse::Ok().json(serde_json::json!({ "kinds": kinds }))
}

/// Parse content kind string
fn parse_kind(s: &str) -> Result<ContentKind> {
    ContentKind::parse(s).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid kind: {}. Must be one of: post, question, market",
            s
        ))
    })
}

/// Parse viewer id string
fn parse_viewer_id(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s).map_err(|_| AppError::BadRequest("Invalid viewer_id format".to_string()))
}

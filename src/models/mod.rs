use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content kind for trending filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// General feed post (crop photos, updates, tips)
    Post,
    /// Question to the community
    Question,
    /// Marketplace listing (produce, equipment, inputs)
    Market,
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Question => "question",
            Self::Market => "market",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "post" => Some(Self::Post),
            "question" => Some(Self::Question),
            "market" => Some(Self::Market),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Candidate content record as fetched from the content store.
///
/// Read-only input to the trending calculator; the counters are snapshots
/// taken at fetch time and are never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: Option<String>,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub body: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub created_at: DateTime<Utc>,
}

/// A content item plus its derived trending fields.
///
/// `age_hours` and `velocity` are ephemeral: recomputed on every evaluation,
/// never persisted.
#[derive(Debug, Clone)]
pub struct ScoredItem {
    pub item: ContentItem,
    pub age_hours: f64,
    pub velocity: f64,
}

/// Ranked post as stored in the result cache and returned to clients.
///
/// Deliberately viewer-independent so one cache entry serves all viewers;
/// `velocity` and `age_hours` are rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPost {
    pub id: Uuid,
    pub author_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar_url: Option<String>,
    pub body: String,
    pub kind: ContentKind,
    #[serde(default)]
    pub media_urls: Vec<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub created_at: DateTime<Utc>,
    pub velocity: f64,
    pub age_hours: f64,
}

impl From<ScoredItem> for RankedPost {
    fn from(scored: ScoredItem) -> Self {
        let ContentItem {
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
        } = scored.item;

        Self {
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
            velocity: round2(scored.velocity),
            age_hours: round2(scored.age_hours),
        }
    }
}

impl RankedPost {
    /// Attach viewer-specific flags, producing the response item.
    pub fn with_flags(self, liked: bool, saved: bool) -> TrendingPost {
        TrendingPost {
            post: self,
            liked,
            saved,
        }
    }
}

/// Response item: the cached core plus per-viewer engagement flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingPost {
    #[serde(flatten)]
    pub post: RankedPost,
    pub liked: bool,
    pub saved: bool,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Engagement-velocity scoring for trending content
//!
//! Ranks candidate posts by a decayed weighted engagement sum:
//! - raw_weight = likes + comments * 2 + shares * 3
//! - velocity   = raw_weight / max(1.0, age_hours)
//!
//! Comments and shares outweigh likes because higher-effort engagement is a
//! stronger trending signal. The inverse-time falloff is a deliberate
//! simplification of exponential decay: cheap, numerically stable, and
//! monotonically decreasing in age for fixed engagement. The one-hour age
//! floor keeps just-created items from dividing by a near-zero age.
//!
//! This module owns the freshness window: candidates older than the window
//! are dropped here, regardless of engagement, so no other layer applies the
//! filter. Pure arithmetic throughout, no error conditions.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use crate::models::{ContentItem, ScoredItem};

/// Display-count bounds for trending page sizes.
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 50;

/// Default page size when the caller does not specify one.
pub const DEFAULT_LIMIT: usize = 10;

/// Silently clamp a caller-supplied limit into `[MIN_LIMIT, MAX_LIMIT]`.
///
/// Out-of-range values are a display preference, not a contract violation,
/// so they are clamped rather than rejected.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(MIN_LIMIT, MAX_LIMIT)
}

/// Rank candidates by engagement velocity.
///
/// Returns at most `clamp_limit(limit)` items, sorted descending by velocity
/// with exact ties broken descending by `created_at` (newer wins, the
/// common case when all counters are zero). Items created before
/// `now - freshness_window` never rank. Empty input yields empty output.
pub fn rank_candidates(
    candidates: Vec<ContentItem>,
    limit: usize,
    now: DateTime<Utc>,
    freshness_window: Duration,
) -> Vec<ScoredItem> {
    let limit = clamp_limit(limit);
    let cutoff = now - freshness_window;

    let mut scored: Vec<ScoredItem> = candidates
        .into_iter()
        .filter(|item| item.created_at >= cutoff)
        .map(|item| score_item(item, now))
        .collect();

    scored.sort_by(|a, b| {
        b.velocity
            .partial_cmp(&a.velocity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.item.created_at.cmp(&a.item.created_at))
    });
    scored.truncate(limit);

    scored
}

fn score_item(item: ContentItem, now: DateTime<Utc>) -> ScoredItem {
    // Floor at one hour so near-zero divisors cannot blow up the score.
    let age_hours = ((now - item.created_at).num_seconds() as f64 / 3600.0).max(1.0);

    let raw_weight =
        item.like_count as f64 + item.comment_count as f64 * 2.0 + item.share_count as f64 * 3.0;

    ScoredItem {
        velocity: raw_weight / age_hours,
        age_hours,
        item,
    }
}

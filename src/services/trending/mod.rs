//! Trending content pipeline: pure velocity scoring plus the cached
//! orchestration around it.

pub mod scoring;
pub mod service;

pub use scoring::{clamp_limit, rank_candidates, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use service::{TrendingResponse, TrendingService};

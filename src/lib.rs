pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use cache::{CachedTrending, Clock, ResultCache, SystemClock};
pub use config::Config;
pub use error::{AppError, Result};

// Re-export trending pipeline components
pub use services::trending::{
    clamp_limit, rank_candidates, TrendingResponse, TrendingService, DEFAULT_LIMIT, MAX_LIMIT,
    MIN_LIMIT,
};

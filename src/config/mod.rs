use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub trending: TrendingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Tunables for the trending calculator and its result cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    /// Maximum content age eligible for trending, in hours (default: 7 days)
    #[serde(default = "default_freshness_window_hours")]
    pub freshness_window_hours: u64,
    /// Result cache TTL in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// How many recent posts to pull from the store as scoring candidates
    #[serde(default = "default_candidate_pool_size")]
    pub candidate_pool_size: i64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            freshness_window_hours: default_freshness_window_hours(),
            cache_ttl_secs: default_cache_ttl_secs(),
            candidate_pool_size: default_candidate_pool_size(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()?,
                log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")?,
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            trending: TrendingConfig {
                freshness_window_hours: std::env::var("TRENDING_FRESHNESS_WINDOW_HOURS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_freshness_window_hours),
                cache_ttl_secs: std::env::var("TRENDING_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_cache_ttl_secs),
                candidate_pool_size: std::env::var("TRENDING_CANDIDATE_POOL_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(default_candidate_pool_size),
            },
        })
    }
}

fn default_freshness_window_hours() -> u64 {
    168
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_candidate_pool_size() -> i64 {
    500
}

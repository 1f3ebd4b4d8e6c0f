pub mod trending;

pub use trending::{get_trending, get_trending_kinds, TrendingHandlerState, TrendingQuery};

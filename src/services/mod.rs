pub mod trending;

pub use trending::{TrendingResponse, TrendingService};

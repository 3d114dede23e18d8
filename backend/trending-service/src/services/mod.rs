pub mod trending;

pub use trending::{Repository, TrendingRepository, VideoHost};

/// HTTP handlers for the trending surface
///
/// Two operations: fetch the enriched trending list and prune expired
/// provisional uploads. Both are envelope-only; selection and prune
/// semantics live in the services layer.
pub mod trending;

pub use trending::{get_trending, prune, PruneResponse, TrendingHandlerState, TrendingResponse};

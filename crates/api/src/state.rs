use std::sync::Arc;

use dexgate_service::AggregatorTrait;
use dexgate_types::{QuoteCache, RateLimiter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub aggregator: Arc<dyn AggregatorTrait>,
	pub quote_cache: Arc<dyn QuoteCache>,
	pub rate_limiter: Arc<dyn RateLimiter>,
}

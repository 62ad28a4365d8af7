//! Dexgate Types
//!
//! Shared models and traits for the dexgate swap-quote aggregation gateway.
//! This crate contains all domain models organized by business entity.

pub mod cache;
pub mod limit;
pub mod models;
pub mod providers;
pub mod quotes;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use quotes::{
	AggregatedQuote, AggregatorError, AggregatorResult, NormalizedQuote, PreparedSwap,
	QuoteParams, QuoteRequest, QuoteResponse, QuoteValidationError, QuoteValidationResult,
	SwapPrepareParams, SwapPrepareRequest,
};

pub use providers::{
	HttpTransport, ProviderError, ProviderId, ProviderResult, QuoteProvider, TransportError,
	TransportResponse,
};

pub use cache::{CacheEntry, QuoteCache};

pub use limit::{RateLimitDecision, RateLimitError, RateLimiter};

pub use models::SecretString;

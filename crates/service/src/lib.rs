//! Dexgate Service
//!
//! The fallback orchestrator and the provider-payload normalizer.

pub mod aggregator;
pub mod normalizer;

pub use aggregator::{
	AggregatorService, AggregatorTrait, QUOTE_PROVIDER_ORDER, SWAP_PROVIDER_ORDER,
};
pub use normalizer::{normalize_quote, FieldAliases, QUOTE_FIELD_ALIASES};

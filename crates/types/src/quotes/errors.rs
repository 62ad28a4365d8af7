//! Error types for quote operations

use thiserror::Error;

/// Validation errors for inbound quote and prepare-swap requests
#[derive(Error, Debug)]
pub enum QuoteValidationError {
	#[error("missing required parameter: {field}")]
	MissingParam { field: String },
}

/// Errors surfaced by the fallback orchestrator
///
/// Individual provider failures never appear here; adapters swallow them
/// internally. Only the aggregate outcome of a whole chain is reported.
#[derive(Error, Debug)]
pub enum AggregatorError {
	#[error("no liquidity from providers")]
	NoLiquidity,

	#[error("no swap payload available")]
	NoSwapPayload,

	#[error("internal error: {reason}")]
	Internal { reason: String },
}

//! Rate limiting trait and decision model

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from rate limiter backends
#[derive(Error, Debug)]
pub enum RateLimitError {
	#[error("rate limiter backend error: {0}")]
	Backend(String),
}

/// The outcome of a single rate-limit check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
	pub allowed: bool,
	pub limit: u32,
	pub remaining: u32,
	pub reset_at: DateTime<Utc>,
}

/// Per-client request rate limiter
///
/// A check both decides and records: an allowed request is counted against
/// the caller's window as part of the same call.
#[async_trait]
pub trait RateLimiter: Send + Sync {
	async fn check(&self, key: &str) -> Result<RateLimitDecision, RateLimitError>;

	fn name(&self) -> &str;
}

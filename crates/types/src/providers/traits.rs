//! Core traits for provider adapter implementations

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderId, TransportError};
use crate::quotes::QuoteRequest;

/// A plain status-and-body HTTP response, decoupled from any client crate
#[derive(Debug, Clone)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Injected HTTP client abstraction
///
/// Adapters never talk to the network directly; they go through this trait
/// so unit tests can script responses and count calls without a network
/// mocking framework.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
	async fn get(
		&self,
		url: &str,
		headers: &HashMap<String, String>,
	) -> Result<TransportResponse, TransportError>;
}

/// Core trait for upstream provider adapters
///
/// The contract is deliberately narrow: an adapter either produces the raw
/// provider payload or `None`. Network errors, non-2xx statuses, parse
/// failures, and missing credentials are all handled inside the adapter;
/// nothing an upstream does can fail a request past this boundary.
#[async_trait]
pub trait QuoteProvider: Send + Sync + Debug {
	/// The identity used as the `source` tag and for registry lookup
	fn id(&self) -> ProviderId;

	/// Fetch a quote payload, or `None` on any failure
	async fn fetch_quote(&self, request: &QuoteRequest) -> Option<Value>;
}

//! Mock providers for examples and testing
//!
//! Simple, working provider stubs usable in tests without network access
//! or mocking frameworks.

use async_trait::async_trait;
use dexgate_types::{ProviderId, QuoteProvider, QuoteRequest};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider stub that returns a fixed payload (or nothing) and counts calls
#[derive(Debug)]
pub struct MockProvider {
	id: ProviderId,
	payload: Option<Value>,
	calls: AtomicUsize,
}

impl MockProvider {
	/// A provider that always returns the given payload.
	pub fn succeeding(id: ProviderId, payload: Value) -> Self {
		Self {
			id,
			payload: Some(payload),
			calls: AtomicUsize::new(0),
		}
	}

	/// A provider that always fails (returns `None`).
	pub fn failing(id: ProviderId) -> Self {
		Self {
			id,
			payload: None,
			calls: AtomicUsize::new(0),
		}
	}

	/// How many times the orchestrator has queried this provider.
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl QuoteProvider for MockProvider {
	fn id(&self) -> ProviderId {
		self.id
	}

	async fn fetch_quote(&self, _request: &QuoteRequest) -> Option<Value> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.payload.clone()
	}
}

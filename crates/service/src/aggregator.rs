//! Fallback orchestration across upstream providers

use async_trait::async_trait;
use dexgate_providers::ProviderRegistry;
use dexgate_types::{
	AggregatedQuote, AggregatorError, AggregatorResult, PreparedSwap, ProviderId, QuoteRequest,
	SwapPrepareRequest,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::normalizer::normalize_quote;

/// Provider order for the quote operation
pub const QUOTE_PROVIDER_ORDER: [ProviderId; 4] = [
	ProviderId::ZeroX,
	ProviderId::OneInch,
	ProviderId::Dexflow,
	ProviderId::Okx,
];

/// Provider order for the prepare-swap operation
///
/// Note: this deliberately differs from the quote order (Okx is tried ahead
/// of DexFlow here). Both orders are preserved as observed.
pub const SWAP_PROVIDER_ORDER: [ProviderId; 4] = [
	ProviderId::ZeroX,
	ProviderId::OneInch,
	ProviderId::Okx,
	ProviderId::Dexflow,
];

/// Orchestrator interface, behind a trait so handlers can be tested against
/// stub implementations
#[async_trait]
pub trait AggregatorTrait: Send + Sync {
	async fn fetch_quote(&self, request: &QuoteRequest) -> AggregatorResult<AggregatedQuote>;

	async fn prepare_swap(&self, request: &SwapPrepareRequest) -> AggregatorResult<PreparedSwap>;
}

/// Sequential first-success orchestrator over the provider registry
///
/// Providers are awaited strictly one at a time, never in parallel: a
/// simplicity-over-latency tradeoff. There is no retry across the chain;
/// retry exists only inside the Okx adapter.
pub struct AggregatorService {
	registry: Arc<ProviderRegistry>,
	quote_order: Vec<ProviderId>,
	swap_order: Vec<ProviderId>,
}

impl AggregatorService {
	pub fn new(registry: Arc<ProviderRegistry>) -> Self {
		Self::with_orders(
			registry,
			QUOTE_PROVIDER_ORDER.to_vec(),
			SWAP_PROVIDER_ORDER.to_vec(),
		)
	}

	/// Construct with explicit provider orders, for tests and bespoke wiring.
	pub fn with_orders(
		registry: Arc<ProviderRegistry>,
		quote_order: Vec<ProviderId>,
		swap_order: Vec<ProviderId>,
	) -> Self {
		Self {
			registry,
			quote_order,
			swap_order,
		}
	}

	async fn first_success(
		&self,
		order: &[ProviderId],
		request: &QuoteRequest,
	) -> Option<(ProviderId, Value)> {
		for id in order {
			let Some(provider) = self.registry.get(*id) else {
				warn!(provider = %id, "provider not registered; skipping");
				continue;
			};

			if let Some(payload) = provider.fetch_quote(request).await {
				info!(provider = %id, "provider returned a payload");
				return Some((*id, payload));
			}
		}
		None
	}
}

#[async_trait]
impl AggregatorTrait for AggregatorService {
	async fn fetch_quote(&self, request: &QuoteRequest) -> AggregatorResult<AggregatedQuote> {
		debug!(key = %request.cache_key(), "running quote fallback chain");

		match self.first_success(&self.quote_order, request).await {
			Some((source, payload)) => Ok(AggregatedQuote {
				source,
				data: normalize_quote(source, &payload),
			}),
			None => {
				warn!("quote chain exhausted without a usable payload");
				Err(AggregatorError::NoLiquidity)
			},
		}
	}

	async fn prepare_swap(&self, request: &SwapPrepareRequest) -> AggregatorResult<PreparedSwap> {
		debug!(taker = %request.taker_address, "running prepare-swap fallback chain");

		// Prepare-swap hands back the winning provider's payload untouched.
		let quote_request = request.as_quote_request();
		match self.first_success(&self.swap_order, &quote_request).await {
			Some((source, payload)) => Ok(PreparedSwap {
				source,
				data: payload,
			}),
			None => {
				warn!("prepare-swap chain exhausted without a usable payload");
				Err(AggregatorError::NoSwapPayload)
			},
		}
	}
}

//! OKX DEX aggregator adapter with signed requests and retry

use async_trait::async_trait;
use dexgate_config::ProviderSettings;
use dexgate_types::{
	HttpTransport, ProviderError, ProviderId, ProviderResult, QuoteProvider, QuoteRequest,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::signing::OkxSigner;

/// Adapter for the OKX-style signed DEX aggregator endpoint
///
/// The only adapter in the chain that authenticates and the only one that
/// retries: up to `max_retries` attempts with a linear backoff of
/// `retry_backoff_ms * attempt` after each failure.
#[derive(Debug)]
pub struct OkxProvider {
	endpoint: String,
	chain_id: u64,
	max_retries: u32,
	retry_backoff_ms: u64,
	signer: OkxSigner,
	transport: Arc<dyn HttpTransport>,
}

impl OkxProvider {
	pub fn new(settings: &ProviderSettings, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			endpoint: settings.okx.endpoint.clone(),
			chain_id: settings.chain_id,
			max_retries: settings.okx.max_retries,
			retry_backoff_ms: settings.okx.retry_backoff_ms,
			signer: OkxSigner::from_settings(&settings.okx),
			transport,
		}
	}

	/// Request path including the query string; this exact string is signed.
	fn quote_path(&self, request: &QuoteRequest) -> String {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("chainId", &self.chain_id.to_string())
			.append_pair("amount", &request.sell_amount)
			.append_pair("fromTokenAddress", &request.sell_token)
			.append_pair("toTokenAddress", &request.buy_token)
			.finish();
		format!("/api/v5/dex/aggregator/quote?{}", query)
	}

	async fn try_fetch(&self, request: &QuoteRequest) -> ProviderResult<Value> {
		let request_path = self.quote_path(request);
		let signed = self.signer.sign("GET", &request_path, "");
		if !signed.configured {
			return Err(ProviderError::NotConfigured);
		}
		let url = format!("{}{}", self.endpoint, request_path);

		for attempt in 1..=self.max_retries {
			match self.transport.get(&url, &signed.headers).await {
				Ok(response) if response.is_success() => {
					// A 2xx body that is not JSON is still handed on, wrapped raw.
					return match serde_json::from_str(&response.body) {
						Ok(payload) => Ok(payload),
						Err(_) => Ok(json!({ "raw": response.body })),
					};
				},
				Ok(response) => {
					warn!(
						provider = %self.id(),
						status = response.status,
						attempt,
						"upstream returned failure status"
					);
				},
				Err(err) => {
					warn!(provider = %self.id(), error = %err, attempt, "transport error");
				},
			}

			sleep(Duration::from_millis(
				self.retry_backoff_ms * u64::from(attempt),
			))
			.await;
		}

		Err(ProviderError::RetriesExhausted {
			attempts: self.max_retries,
		})
	}
}

#[async_trait]
impl QuoteProvider for OkxProvider {
	fn id(&self) -> ProviderId {
		ProviderId::Okx
	}

	async fn fetch_quote(&self, request: &QuoteRequest) -> Option<Value> {
		match self.try_fetch(request).await {
			Ok(payload) => Some(payload),
			Err(ProviderError::NotConfigured) => {
				debug!(provider = %self.id(), "credentials not configured; skipping provider");
				None
			},
			Err(err) => {
				warn!(provider = %self.id(), error = %err, "quote fetch failed");
				None
			},
		}
	}
}

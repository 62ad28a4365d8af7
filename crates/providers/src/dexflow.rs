//! DexFlow quote adapter

use async_trait::async_trait;
use dexgate_config::ProviderSettings;
use dexgate_types::{
	HttpTransport, ProviderError, ProviderId, ProviderResult, QuoteProvider, QuoteRequest,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::signing::base_headers;

/// Adapter for the unauthenticated DexFlow quote endpoint
#[derive(Debug)]
pub struct DexFlowProvider {
	endpoint: String,
	chain_id: u64,
	transport: Arc<dyn HttpTransport>,
}

impl DexFlowProvider {
	pub fn new(settings: &ProviderSettings, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			endpoint: settings.dexflow.endpoint.clone(),
			chain_id: settings.chain_id,
			transport,
		}
	}

	fn quote_url(&self, request: &QuoteRequest) -> String {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("chainId", &self.chain_id.to_string())
			.append_pair("sellToken", &request.sell_token)
			.append_pair("buyToken", &request.buy_token)
			.append_pair("sellAmount", &request.sell_amount)
			.finish();
		format!("{}/v1/quote?{}", self.endpoint, query)
	}

	async fn try_fetch(&self, request: &QuoteRequest) -> ProviderResult<Value> {
		let response = self
			.transport
			.get(&self.quote_url(request), &base_headers())
			.await?;
		if !response.is_success() {
			return Err(ProviderError::HttpStatus {
				status: response.status,
			});
		}
		Ok(serde_json::from_str(&response.body)?)
	}
}

#[async_trait]
impl QuoteProvider for DexFlowProvider {
	fn id(&self) -> ProviderId {
		ProviderId::Dexflow
	}

	async fn fetch_quote(&self, request: &QuoteRequest) -> Option<Value> {
		debug!(
			provider = %self.id(),
			sell_token = %request.sell_token,
			buy_token = %request.buy_token,
			sell_amount = %request.sell_amount,
			"fetching quote"
		);

		match self.try_fetch(request).await {
			Ok(payload) => Some(payload),
			Err(err) => {
				warn!(provider = %self.id(), error = %err, "quote fetch failed");
				None
			},
		}
	}
}

//! 0x permit2 quote adapter

use async_trait::async_trait;
use dexgate_config::ProviderSettings;
use dexgate_types::{
	HttpTransport, ProviderError, ProviderId, ProviderResult, QuoteProvider, QuoteRequest,
	SecretString,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::signing::base_headers;

/// Adapter for the 0x-style permit2 quote endpoint
#[derive(Debug)]
pub struct ZeroExProvider {
	endpoint: String,
	api_key: Option<SecretString>,
	chain_id: u64,
	taker_address: String,
	transport: Arc<dyn HttpTransport>,
}

impl ZeroExProvider {
	pub fn new(settings: &ProviderSettings, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			endpoint: settings.zerox.endpoint.clone(),
			api_key: settings.zerox.api_key.clone(),
			chain_id: settings.chain_id,
			taker_address: settings.taker_address.clone(),
			transport,
		}
	}

	fn quote_url(&self, request: &QuoteRequest) -> String {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("sellToken", &request.sell_token)
			.append_pair("buyToken", &request.buy_token)
			.append_pair("sellAmount", &request.sell_amount)
			.append_pair("chainId", &self.chain_id.to_string())
			.append_pair("taker", &self.taker_address)
			.finish();
		format!("{}/swap/permit2/quote?{}", self.endpoint, query)
	}

	fn headers(&self) -> HashMap<String, String> {
		let mut headers = base_headers();
		headers.insert("0x-version".to_string(), "v2".to_string());
		if let Some(api_key) = &self.api_key {
			headers.insert("0x-api-key".to_string(), api_key.expose_secret().to_string());
		}
		headers
	}

	async fn try_fetch(&self, request: &QuoteRequest) -> ProviderResult<Value> {
		let response = self
			.transport
			.get(&self.quote_url(request), &self.headers())
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
impl QuoteProvider for ZeroExProvider {
	fn id(&self) -> ProviderId {
		ProviderId::ZeroX
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

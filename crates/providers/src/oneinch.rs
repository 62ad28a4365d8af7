//! 1inch quote adapter

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

/// Adapter for the 1inch-style quote endpoint
///
/// Works unauthenticated; the bearer token is attached only when an API key
/// is configured.
#[derive(Debug)]
pub struct OneInchProvider {
	endpoint: String,
	api_key: Option<SecretString>,
	chain_id: u64,
	transport: Arc<dyn HttpTransport>,
}

impl OneInchProvider {
	pub fn new(settings: &ProviderSettings, transport: Arc<dyn HttpTransport>) -> Self {
		Self {
			endpoint: settings.oneinch.endpoint.clone(),
			api_key: settings.oneinch.api_key.clone(),
			chain_id: settings.chain_id,
			transport,
		}
	}

	fn quote_url(&self, request: &QuoteRequest) -> String {
		let query = form_urlencoded::Serializer::new(String::new())
			.append_pair("fromTokenAddress", &request.sell_token)
			.append_pair("toTokenAddress", &request.buy_token)
			.append_pair("amount", &request.sell_amount)
			.finish();
		format!("{}/v5.0/{}/quote?{}", self.endpoint, self.chain_id, query)
	}

	fn headers(&self) -> HashMap<String, String> {
		let mut headers = base_headers();
		if let Some(api_key) = &self.api_key {
			headers.insert(
				"Authorization".to_string(),
				format!("Bearer {}", api_key.expose_secret()),
			);
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
impl QuoteProvider for OneInchProvider {
	fn id(&self) -> ProviderId {
		ProviderId::OneInch
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

//! Production HTTP transport backed by reqwest

use async_trait::async_trait;
use dexgate_types::{HttpTransport, TransportError, TransportResponse};
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Client;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

/// Pooled reqwest client with a bounded per-request timeout
///
/// One instance is shared by every adapter so connections are reused across
/// providers.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: Client,
}

impl ReqwestTransport {
	pub fn new(request_timeout_ms: u64) -> Result<Self, TransportError> {
		let client = Client::builder()
			.timeout(Duration::from_millis(request_timeout_ms))
			.build()
			.map_err(|e| TransportError::Request(e.to_string()))?;
		Ok(Self { client })
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn get(
		&self,
		url: &str,
		headers: &HashMap<String, String>,
	) -> Result<TransportResponse, TransportError> {
		let mut request = self.client.get(url);
		for (name, value) in headers {
			let name = HeaderName::from_str(name)
				.map_err(|e| TransportError::InvalidHeader(e.to_string()))?;
			let value = HeaderValue::from_str(value)
				.map_err(|e| TransportError::InvalidHeader(e.to_string()))?;
			request = request.header(name, value);
		}

		let response = request
			.send()
			.await
			.map_err(|e| TransportError::Request(e.to_string()))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| TransportError::Request(e.to_string()))?;

		Ok(TransportResponse { status, body })
	}
}

//! Canonical quote shapes returned by the gateway

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::providers::ProviderId;

/// One provider payload mapped into the canonical quote record
///
/// All numeric fields are carried as strings to avoid precision loss on
/// 18-decimal token amounts. Fields a provider did not supply are empty
/// strings (or the documented defaults), never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuote {
	pub buy_amount: String,
	pub sell_amount: String,
	pub price: String,
	pub estimated_gas: String,
	pub sources: Vec<Value>,
	/// The untouched provider payload, for downstream consumers that need
	/// provider-specific fields.
	pub provider_raw: Value,
}

/// The successful outcome of a quote fallback chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedQuote {
	pub source: ProviderId,
	pub data: NormalizedQuote,
}

/// The successful outcome of a prepare-swap fallback chain
///
/// Prepare-swap passes the winning provider's payload through unnormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedSwap {
	pub source: ProviderId,
	pub data: Value,
}

/// Wire shape for quote responses, with the cache marker
///
/// The first response for a given key is never marked cached; only replays
/// served from the cache carry `"cached": true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cached: Option<bool>,
	#[serde(flatten)]
	pub quote: AggregatedQuote,
}

impl QuoteResponse {
	/// A freshly aggregated quote, no cache marker.
	pub fn fresh(quote: AggregatedQuote) -> Self {
		Self {
			cached: None,
			quote,
		}
	}

	/// A quote replayed from the cache.
	pub fn replayed(quote: AggregatedQuote) -> Self {
		Self {
			cached: Some(true),
			quote,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn sample_quote() -> AggregatedQuote {
		AggregatedQuote {
			source: ProviderId::ZeroX,
			data: NormalizedQuote {
				buy_amount: "3000000000".to_string(),
				sell_amount: "1000000000000000000".to_string(),
				price: "3e-9".to_string(),
				estimated_gas: "0".to_string(),
				sources: vec![],
				provider_raw: json!({"buyAmount": "3000000000"}),
			},
		}
	}

	#[test]
	fn fresh_response_omits_cached_marker() {
		let body = serde_json::to_value(QuoteResponse::fresh(sample_quote())).unwrap();
		assert!(body.get("cached").is_none());
		assert_eq!(body["source"], "zeroX");
		assert_eq!(body["data"]["buyAmount"], "3000000000");
	}

	#[test]
	fn replayed_response_carries_cached_marker() {
		let fresh = serde_json::to_value(QuoteResponse::fresh(sample_quote())).unwrap();
		let mut replayed = serde_json::to_value(QuoteResponse::replayed(sample_quote())).unwrap();

		assert_eq!(replayed["cached"], true);
		// Apart from the marker the two payloads are identical.
		replayed.as_object_mut().unwrap().remove("cached");
		assert_eq!(fresh, replayed);
	}

	#[test]
	fn normalized_quote_uses_camel_case_wire_names() {
		let body = serde_json::to_value(sample_quote()).unwrap();
		let data = body["data"].as_object().unwrap();
		assert!(data.contains_key("buyAmount"));
		assert!(data.contains_key("sellAmount"));
		assert!(data.contains_key("estimatedGas"));
		assert!(data.contains_key("providerRaw"));
	}
}

//! Inbound request models and validation
//!
//! Handlers deserialize the all-optional `*Params` shapes and validate them
//! into the required-field request types before any provider is contacted.

use serde::{Deserialize, Serialize};

use super::{QuoteValidationError, QuoteValidationResult};

/// A validated swap-quote request
///
/// All three fields are mandatory, carried as raw strings. No case
/// normalization or checksum validation is applied; the strings are used
/// verbatim both upstream and as the cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub sell_token: String,
	pub buy_token: String,
	pub sell_amount: String,
}

impl QuoteRequest {
	/// Cache key for this request: the exact literal parameter triple.
	pub fn cache_key(&self) -> String {
		format!("{}|{}|{}", self.sell_token, self.buy_token, self.sell_amount)
	}
}

/// A validated prepare-swap request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPrepareRequest {
	pub sell_token: String,
	pub buy_token: String,
	pub sell_amount: String,
	pub taker_address: String,
}

impl SwapPrepareRequest {
	/// The quote-shaped subset of this request, as sent to providers.
	pub fn as_quote_request(&self) -> QuoteRequest {
		QuoteRequest {
			sell_token: self.sell_token.clone(),
			buy_token: self.buy_token.clone(),
			sell_amount: self.sell_amount.clone(),
		}
	}
}

/// Raw query parameters for GET quote requests, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
	pub sell_token: Option<String>,
	pub buy_token: Option<String>,
	pub sell_amount: Option<String>,
}

impl QuoteParams {
	/// Validate that all required parameters are present and non-empty.
	pub fn validate(self) -> QuoteValidationResult<QuoteRequest> {
		Ok(QuoteRequest {
			sell_token: require(self.sell_token, "sellToken")?,
			buy_token: require(self.buy_token, "buyToken")?,
			sell_amount: require(self.sell_amount, "sellAmount")?,
		})
	}
}

/// Raw JSON body for prepare-swap requests, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapPrepareParams {
	pub sell_token: Option<String>,
	pub buy_token: Option<String>,
	pub sell_amount: Option<String>,
	pub taker_address: Option<String>,
}

impl SwapPrepareParams {
	/// Validate that all required body fields are present and non-empty.
	pub fn validate(self) -> QuoteValidationResult<SwapPrepareRequest> {
		Ok(SwapPrepareRequest {
			sell_token: require(self.sell_token, "sellToken")?,
			buy_token: require(self.buy_token, "buyToken")?,
			sell_amount: require(self.sell_amount, "sellAmount")?,
			taker_address: require(self.taker_address, "takerAddress")?,
		})
	}
}

/// Empty strings count as missing, the same as an absent parameter.
fn require(value: Option<String>, field: &str) -> QuoteValidationResult<String> {
	match value {
		Some(v) if !v.is_empty() => Ok(v),
		_ => Err(QuoteValidationError::MissingParam {
			field: field.to_string(),
		}),
	}
}

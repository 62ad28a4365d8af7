//! Provider payload normalization
//!
//! Maps arbitrary provider JSON into the canonical quote record through a
//! declarative alias table. Resolution is provider-agnostic: every known
//! field name is probed in a fixed priority order, so one table serves all
//! providers without per-provider branching.

use dexgate_types::{NormalizedQuote, ProviderId};
use serde_json::Value;
use tracing::debug;

/// Alias lists for each canonical field, highest priority first
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
	pub buy_amount: &'static [&'static str],
	pub sell_amount: &'static [&'static str],
	pub estimated_gas: &'static [&'static str],
	pub sources: &'static [&'static str],
}

/// The field names observed across the supported providers
pub const QUOTE_FIELD_ALIASES: FieldAliases = FieldAliases {
	buy_amount: &[
		"toTokenAmount",
		"buyAmount",
		"toAmount",
		"to_token_amount",
		"receiveAmount",
	],
	sell_amount: &[
		"fromTokenAmount",
		"sellAmount",
		"fromAmount",
		"from_token_amount",
		"sendAmount",
	],
	estimated_gas: &[
		"estimatedGas",
		"estimatedGasFee",
		"estimated_gas",
		"estimated_gas_fee",
	],
	sources: &["protocols", "sources", "dexRouterList"],
};

/// Map a raw provider payload into the canonical quote record
///
/// Never fails: fields no alias matches become empty strings (or the
/// documented defaults). The provider identity is used for logging only.
pub fn normalize_quote(provider: ProviderId, payload: &Value) -> NormalizedQuote {
	let buy_amount = resolve_string(payload, QUOTE_FIELD_ALIASES.buy_amount);
	let sell_amount = resolve_string(payload, QUOTE_FIELD_ALIASES.sell_amount);
	let estimated_gas = resolve_string(payload, QUOTE_FIELD_ALIASES.estimated_gas)
		.unwrap_or_else(|| "0".to_string());
	let sources = resolve_array(payload, QUOTE_FIELD_ALIASES.sources);
	let price = resolve_price(payload, buy_amount.as_deref(), sell_amount.as_deref());

	debug!(
		%provider,
		buy_amount_resolved = buy_amount.is_some(),
		sell_amount_resolved = sell_amount.is_some(),
		"normalized provider payload"
	);

	NormalizedQuote {
		buy_amount: buy_amount.unwrap_or_default(),
		sell_amount: sell_amount.unwrap_or_default(),
		price: price.unwrap_or_default(),
		estimated_gas,
		sources,
		provider_raw: payload.clone(),
	}
}

/// Probe the aliases in order and render the first present scalar as a string.
fn resolve_string(payload: &Value, aliases: &[&str]) -> Option<String> {
	aliases
		.iter()
		.find_map(|field| scalar_to_string(payload.get(*field)?))
}

/// Empty strings count as absent, so the probe falls through to the next alias.
fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) if !s.is_empty() => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}

fn resolve_array(payload: &Value, aliases: &[&str]) -> Vec<Value> {
	aliases
		.iter()
		.find_map(|field| payload.get(*field)?.as_array().cloned())
		.unwrap_or_default()
}

/// The provider's own price wins; otherwise derive it from the amounts.
fn resolve_price(payload: &Value, buy: Option<&str>, sell: Option<&str>) -> Option<String> {
	if let Some(price) = payload.get("price").and_then(scalar_to_string) {
		return Some(price);
	}

	let buy: f64 = buy?.parse().ok()?;
	let sell: f64 = sell?.parse().ok()?;
	if sell == 0.0 {
		return None;
	}
	Some(format_ratio(buy / sell))
}

/// Ratios below 1e-6 render in exponent form ("3e-9"), larger ones in plain
/// decimal.
fn format_ratio(value: f64) -> String {
	if value != 0.0 && value.abs() < 1e-6 {
		format!("{:e}", value)
	} else {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn normalize(payload: Value) -> NormalizedQuote {
		normalize_quote(ProviderId::ZeroX, &payload)
	}

	#[test]
	fn resolves_each_buy_amount_alias() {
		for alias in QUOTE_FIELD_ALIASES.buy_amount {
			let mut payload = serde_json::Map::new();
			payload.insert(alias.to_string(), json!("123"));
			let quote = normalize(Value::Object(payload));
			assert_eq!(quote.buy_amount, "123", "alias {alias}");
		}
	}

	#[test]
	fn aliases_are_probed_in_priority_order() {
		let quote = normalize(json!({
			"buyAmount": "second",
			"toTokenAmount": "first",
			"toAmount": "third",
		}));
		assert_eq!(quote.buy_amount, "first");
	}

	#[test]
	fn numbers_are_rendered_as_strings() {
		let quote = normalize(json!({
			"toTokenAmount": 3000000000u64,
			"fromTokenAmount": "1000",
			"estimatedGas": 21000,
		}));
		assert_eq!(quote.buy_amount, "3000000000");
		assert_eq!(quote.estimated_gas, "21000");
	}

	#[test]
	fn empty_strings_fall_through_to_the_next_alias() {
		let quote = normalize(json!({
			"toTokenAmount": "",
			"buyAmount": "42",
		}));
		assert_eq!(quote.buy_amount, "42");
	}

	#[test]
	fn missing_fields_become_defaults_not_errors() {
		let quote = normalize(json!({}));
		assert_eq!(quote.buy_amount, "");
		assert_eq!(quote.sell_amount, "");
		assert_eq!(quote.price, "");
		assert_eq!(quote.estimated_gas, "0");
		assert!(quote.sources.is_empty());
	}

	#[test]
	fn provider_price_wins_over_the_computed_ratio() {
		let quote = normalize(json!({
			"price": "2999.5",
			"toTokenAmount": "3000000000",
			"fromTokenAmount": "1000000000000000000",
		}));
		assert_eq!(quote.price, "2999.5");
	}

	#[test]
	fn tiny_computed_ratios_render_in_exponent_form() {
		let quote = normalize(json!({
			"toTokenAmount": "3000000000",
			"fromTokenAmount": "1000000000000000000",
		}));
		assert_eq!(quote.price, "3e-9");
	}

	#[test]
	fn ordinary_computed_ratios_render_in_plain_decimal() {
		let quote = normalize(json!({
			"toTokenAmount": "3000",
			"fromTokenAmount": "2000",
		}));
		assert_eq!(quote.price, "1.5");
	}

	#[test]
	fn unparseable_amounts_leave_the_price_empty() {
		let quote = normalize(json!({
			"toTokenAmount": "abc",
			"fromTokenAmount": "1000",
		}));
		assert_eq!(quote.price, "");
	}

	#[test]
	fn sources_take_the_first_array_alias() {
		let quote = normalize(json!({
			"dexRouterList": [{"router": "a"}],
			"protocols": [{"name": "UNISWAP_V3"}],
		}));
		assert_eq!(quote.sources, vec![json!({"name": "UNISWAP_V3"})]);
	}

	#[test]
	fn raw_payload_is_preserved_verbatim() {
		let payload = json!({"toTokenAmount": "1", "extra": {"nested": true}});
		let quote = normalize(payload.clone());
		assert_eq!(quote.provider_raw, payload);
	}
}

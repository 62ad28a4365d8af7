//! Quote cache trait and entry model

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::quotes::AggregatedQuote;

/// One cached aggregation result with its creation time
#[derive(Debug, Clone)]
pub struct CacheEntry {
	pub cached_at: DateTime<Utc>,
	pub value: AggregatedQuote,
}

impl CacheEntry {
	/// Create an entry stamped with the current time.
	pub fn new(value: AggregatedQuote) -> Self {
		Self {
			cached_at: Utc::now(),
			value,
		}
	}

	/// Whether this entry has outlived the given TTL.
	pub fn is_expired(&self, ttl_ms: u64) -> bool {
		Utc::now() - self.cached_at >= Duration::milliseconds(ttl_ms as i64)
	}
}

/// Pluggable short-TTL cache in front of the quote operation
///
/// Implementations own expiry: `get` must never return an entry older than
/// the TTL and must delete such entries as it finds them. There is no
/// single-flight: concurrent misses for one key each run the full provider
/// chain.
#[async_trait]
pub trait QuoteCache: Send + Sync {
	async fn get(&self, key: &str) -> Option<CacheEntry>;
	async fn set(&self, key: String, entry: CacheEntry);
	async fn delete(&self, key: &str);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::providers::ProviderId;
	use crate::quotes::NormalizedQuote;
	use serde_json::Value;

	fn entry_aged(age_ms: i64) -> CacheEntry {
		CacheEntry {
			cached_at: Utc::now() - Duration::milliseconds(age_ms),
			value: AggregatedQuote {
				source: ProviderId::Dexflow,
				data: NormalizedQuote {
					buy_amount: "1".to_string(),
					sell_amount: "2".to_string(),
					price: "0.5".to_string(),
					estimated_gas: "0".to_string(),
					sources: vec![],
					provider_raw: Value::Null,
				},
			},
		}
	}

	#[test]
	fn entry_within_ttl_is_live() {
		assert!(!entry_aged(1_000).is_expired(5_000));
	}

	#[test]
	fn entry_past_ttl_is_expired() {
		assert!(entry_aged(6_000).is_expired(5_000));
	}
}

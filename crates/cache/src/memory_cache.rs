//! In-memory quote cache implementation using DashMap with TTL expiry

use async_trait::async_trait;
use dashmap::DashMap;
use dexgate_types::{CacheEntry, QuoteCache};
use std::sync::Arc;
use tracing::debug;

/// In-memory TTL cache for aggregated quotes
///
/// Expiry is lazy: a stale entry survives in the map until the next lookup
/// for its key, which deletes it and reports a miss. Keys are the exact
/// request parameter triples; no normalization is applied.
#[derive(Debug, Clone)]
pub struct MemoryQuoteCache {
	entries: Arc<DashMap<String, CacheEntry>>,
	ttl_ms: u64,
}

impl MemoryQuoteCache {
	/// Create a cache whose entries live for `ttl_ms` milliseconds.
	pub fn new(ttl_ms: u64) -> Self {
		Self {
			entries: Arc::new(DashMap::new()),
			ttl_ms,
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[async_trait]
impl QuoteCache for MemoryQuoteCache {
	async fn get(&self, key: &str) -> Option<CacheEntry> {
		let expired = match self.entries.get(key) {
			Some(entry) if !entry.is_expired(self.ttl_ms) => return Some(entry.value().clone()),
			Some(_) => true,
			None => false,
		};

		if expired {
			debug!(key, "evicting expired quote cache entry");
			self.entries.remove(key);
		}
		None
	}

	async fn set(&self, key: String, entry: CacheEntry) {
		self.entries.insert(key, entry);
	}

	async fn delete(&self, key: &str) {
		self.entries.remove(key);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Duration, Utc};
	use dexgate_types::{AggregatedQuote, NormalizedQuote, ProviderId};
	use serde_json::Value;

	fn quote(buy_amount: &str) -> AggregatedQuote {
		AggregatedQuote {
			source: ProviderId::ZeroX,
			data: NormalizedQuote {
				buy_amount: buy_amount.to_string(),
				sell_amount: "1000".to_string(),
				price: String::new(),
				estimated_gas: "0".to_string(),
				sources: vec![],
				provider_raw: Value::Null,
			},
		}
	}

	fn entry_aged(age_ms: i64, buy_amount: &str) -> CacheEntry {
		CacheEntry {
			cached_at: Utc::now() - Duration::milliseconds(age_ms),
			value: quote(buy_amount),
		}
	}

	#[tokio::test]
	async fn live_entries_are_returned() {
		let cache = MemoryQuoteCache::new(5_000);
		cache
			.set("a|b|1".to_string(), entry_aged(0, "42"))
			.await;

		let entry = cache.get("a|b|1").await.unwrap();
		assert_eq!(entry.value.data.buy_amount, "42");
	}

	#[tokio::test]
	async fn expired_entries_are_deleted_on_lookup() {
		let cache = MemoryQuoteCache::new(5_000);
		cache
			.set("a|b|1".to_string(), entry_aged(6_000, "42"))
			.await;

		assert!(cache.get("a|b|1").await.is_none());
		// The stale entry is gone, not just hidden.
		assert!(cache.is_empty());
	}

	#[tokio::test]
	async fn keys_are_exact_literal_strings() {
		let cache = MemoryQuoteCache::new(5_000);
		cache
			.set("0xA|0xB|100".to_string(), entry_aged(0, "42"))
			.await;

		assert!(cache.get("0xa|0xB|100").await.is_none());
		assert!(cache.get("0xA|0xB|100.0").await.is_none());
		assert!(cache.get("0xA|0xB|100").await.is_some());
	}

	#[tokio::test]
	async fn set_replaces_the_previous_entry() {
		let cache = MemoryQuoteCache::new(5_000);
		cache
			.set("a|b|1".to_string(), entry_aged(0, "42"))
			.await;
		cache
			.set("a|b|1".to_string(), entry_aged(0, "43"))
			.await;

		assert_eq!(cache.len(), 1);
		let entry = cache.get("a|b|1").await.unwrap();
		assert_eq!(entry.value.data.buy_amount, "43");
	}

	#[tokio::test]
	async fn delete_removes_the_entry() {
		let cache = MemoryQuoteCache::new(5_000);
		cache
			.set("a|b|1".to_string(), entry_aged(0, "42"))
			.await;
		cache.delete("a|b|1").await;

		assert!(cache.get("a|b|1").await.is_none());
	}
}

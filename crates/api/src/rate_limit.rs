//! Rate limiting implementations

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dexgate_types::{RateLimitDecision, RateLimitError, RateLimiter};
use std::collections::VecDeque;
use std::sync::Arc;

/// In-memory sliding-window rate limiter
///
/// Keeps the timestamps of allowed requests per key and prunes everything
/// older than the window on each check, so the budget genuinely slides
/// instead of resetting on a fixed boundary.
#[derive(Debug)]
pub struct MemoryRateLimiter {
	windows: Arc<DashMap<String, VecDeque<DateTime<Utc>>>>,
	max_requests: u32,
	window: Duration,
}

impl MemoryRateLimiter {
	pub fn new(max_requests: u32, window_secs: u64) -> Self {
		Self {
			windows: Arc::new(DashMap::new()),
			max_requests,
			window: Duration::seconds(window_secs as i64),
		}
	}

	/// Drop keys whose every timestamp has left the window.
	pub fn cleanup_expired(&self) {
		let window_start = Utc::now() - self.window;
		self.windows
			.retain(|_, timestamps| timestamps.back().is_some_and(|t| *t > window_start));
	}
}

#[async_trait]
impl RateLimiter for MemoryRateLimiter {
	async fn check(&self, key: &str) -> Result<RateLimitDecision, RateLimitError> {
		// Clean up stale keys occasionally
		if rand::random::<f64>() < 0.01 {
			self.cleanup_expired();
		}

		let now = Utc::now();
		let window_start = now - self.window;

		let mut entry = self.windows.entry(key.to_string()).or_default();
		let timestamps = entry.value_mut();

		while timestamps.front().is_some_and(|t| *t <= window_start) {
			timestamps.pop_front();
		}

		let allowed = (timestamps.len() as u32) < self.max_requests;
		if allowed {
			timestamps.push_back(now);
		}

		let remaining = self.max_requests.saturating_sub(timestamps.len() as u32);
		let reset_at = timestamps.front().map(|t| *t + self.window).unwrap_or(now);

		Ok(RateLimitDecision {
			allowed,
			limit: self.max_requests,
			remaining,
			reset_at,
		})
	}

	fn name(&self) -> &str {
		"MemoryRateLimiter"
	}
}

/// Limiter that allows everything, used when rate limiting is disabled
///
/// Reports `limit: 0`, which suppresses the rate-limit response headers.
#[derive(Debug, Default)]
pub struct NoopRateLimiter;

#[async_trait]
impl RateLimiter for NoopRateLimiter {
	async fn check(&self, _key: &str) -> Result<RateLimitDecision, RateLimitError> {
		Ok(RateLimitDecision {
			allowed: true,
			limit: 0,
			remaining: 0,
			reset_at: Utc::now(),
		})
	}

	fn name(&self) -> &str {
		"NoopRateLimiter"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn allows_up_to_the_limit_then_denies() {
		let limiter = MemoryRateLimiter::new(20, 15);

		for i in 0..20 {
			let decision = limiter.check("ip:1.2.3.4").await.unwrap();
			assert!(decision.allowed, "request {} should be allowed", i + 1);
		}

		let decision = limiter.check("ip:1.2.3.4").await.unwrap();
		assert!(!decision.allowed);
		assert_eq!(decision.remaining, 0);
		assert_eq!(decision.limit, 20);
	}

	#[tokio::test]
	async fn keys_are_counted_independently() {
		let limiter = MemoryRateLimiter::new(1, 15);

		assert!(limiter.check("ip:a").await.unwrap().allowed);
		assert!(!limiter.check("ip:a").await.unwrap().allowed);
		assert!(limiter.check("ip:b").await.unwrap().allowed);
	}

	#[tokio::test]
	async fn old_timestamps_slide_out_of_the_window() {
		let limiter = MemoryRateLimiter::new(2, 15);

		// Backfill a full window of requests that have already expired.
		let stale = Utc::now() - Duration::seconds(16);
		limiter
			.windows
			.insert("ip:a".to_string(), VecDeque::from(vec![stale, stale]));

		let decision = limiter.check("ip:a").await.unwrap();
		assert!(decision.allowed);
		assert_eq!(decision.remaining, 1);
	}

	#[tokio::test]
	async fn denied_requests_do_not_consume_budget() {
		let limiter = MemoryRateLimiter::new(1, 15);

		assert!(limiter.check("ip:a").await.unwrap().allowed);
		for _ in 0..5 {
			assert!(!limiter.check("ip:a").await.unwrap().allowed);
		}

		// Still a single recorded request in the window.
		assert_eq!(limiter.windows.get("ip:a").unwrap().len(), 1);
	}

	#[tokio::test]
	async fn cleanup_drops_fully_expired_keys() {
		let limiter = MemoryRateLimiter::new(2, 15);
		let stale = Utc::now() - Duration::seconds(20);
		limiter
			.windows
			.insert("ip:gone".to_string(), VecDeque::from(vec![stale]));
		limiter.check("ip:live").await.unwrap();

		limiter.cleanup_expired();

		assert!(limiter.windows.get("ip:gone").is_none());
		assert!(limiter.windows.get("ip:live").is_some());
	}
}

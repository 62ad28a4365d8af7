//! Rate limiting middleware for `/api/*` routes

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use dexgate_types::RateLimitDecision;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Reject over-budget clients before any aggregation logic runs
pub async fn rate_limit_middleware(
	State(state): State<AppState>,
	request: Request,
	next: Next,
) -> Response {
	let key = client_key(request.headers());

	match state.rate_limiter.check(&key).await {
		Ok(decision) if !decision.allowed => {
			warn!(key = %key, limiter = state.rate_limiter.name(), "rate limit exceeded");
			let mut response = ApiError::RateLimited.into_response();
			apply_rate_limit_headers(response.headers_mut(), &decision);
			response
		},
		Ok(decision) => {
			let mut response = next.run(request).await;
			apply_rate_limit_headers(response.headers_mut(), &decision);
			response
		},
		Err(err) => {
			// Continue without rate limiting on limiter errors
			warn!(error = %err, "rate limiter check failed; allowing request");
			next.run(request).await
		},
	}
}

/// Client identity for rate limiting: forwarded IP headers, else a shared
/// bucket.
fn client_key(headers: &HeaderMap) -> String {
	let ip = headers
		.get("x-forwarded-for")
		.and_then(|v| v.to_str().ok())
		.or_else(|| headers.get("x-real-ip").and_then(|v| v.to_str().ok()))
		.unwrap_or("unknown");
	format!("ip:{}", ip)
}

/// Standard draft rate-limit headers; suppressed for the no-op limiter.
fn apply_rate_limit_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
	if decision.limit == 0 {
		return;
	}

	let reset_secs = (decision.reset_at - Utc::now()).num_seconds().max(0);
	for (name, value) in [
		("ratelimit-limit", decision.limit.to_string()),
		("ratelimit-remaining", decision.remaining.to_string()),
		("ratelimit-reset", reset_secs.to_string()),
	] {
		if let Ok(value) = HeaderValue::from_str(&value) {
			headers.insert(name, value);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_key_prefers_forwarded_for() {
		let mut headers = HeaderMap::new();
		headers.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
		headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
		assert_eq!(client_key(&headers), "ip:10.0.0.1");

		headers.remove("x-forwarded-for");
		assert_eq!(client_key(&headers), "ip:10.0.0.2");

		headers.remove("x-real-ip");
		assert_eq!(client_key(&headers), "ip:unknown");
	}

	#[test]
	fn rate_limit_headers_reflect_the_decision() {
		let mut headers = HeaderMap::new();
		apply_rate_limit_headers(
			&mut headers,
			&RateLimitDecision {
				allowed: true,
				limit: 20,
				remaining: 7,
				reset_at: Utc::now() + chrono::Duration::seconds(9),
			},
		);

		assert_eq!(headers["ratelimit-limit"], "20");
		assert_eq!(headers["ratelimit-remaining"], "7");
		let reset: i64 = headers["ratelimit-reset"].to_str().unwrap().parse().unwrap();
		assert!((0..=9).contains(&reset));
	}

	#[test]
	fn noop_decisions_emit_no_headers() {
		let mut headers = HeaderMap::new();
		apply_rate_limit_headers(
			&mut headers,
			&RateLimitDecision {
				allowed: true,
				limit: 0,
				remaining: 0,
				reset_at: Utc::now(),
			},
		);
		assert!(headers.is_empty());
	}
}

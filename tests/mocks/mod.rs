//! Shared helpers for the end-to-end tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use dexgate::mocks::MockProvider;
use dexgate::{AppState, GatewayBuilder, Settings};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Start a gateway wired to the given mock providers.
pub async fn build_gateway(
	providers: Vec<Arc<MockProvider>>,
	settings: Settings,
) -> (Router, AppState) {
	let mut builder = GatewayBuilder::new().with_settings(settings);
	for provider in providers {
		builder = builder.with_provider(provider);
	}
	builder.start().await.expect("gateway should start")
}

/// Settings with rate limiting switched off, for tests that loop requests.
pub fn unlimited_settings() -> Settings {
	let mut settings = Settings::default();
	settings.rate_limit.enabled = false;
	settings
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
	split(get_response(router, uri).await).await
}

pub async fn get_response(router: &Router, uri: &str) -> axum::response::Response {
	router
		.clone()
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

/// GET with an explicit client identity header.
pub async fn get_as(router: &Router, uri: &str, client_ip: &str) -> (StatusCode, Value) {
	let response = router
		.clone()
		.oneshot(
			Request::builder()
				.uri(uri)
				.header("x-forwarded-for", client_ip)
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	split(response).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
	let response = router
		.clone()
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("content-type", "application/json")
				.body(Body::from(body.to_string()))
				.unwrap(),
		)
		.await
		.unwrap();
	split(response).await
}

async fn split(response: axum::response::Response) -> (StatusCode, Value) {
	let status = response.status();
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	let body = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).unwrap()
	};
	(status, body)
}

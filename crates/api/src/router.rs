use axum::{
	middleware,
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
	LatencyUnit,
};
use tracing::Level;

use crate::handlers::{get_quote, health, prepare_swap};
use crate::middleware::rate_limit_middleware;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
	// Layers prepared first so they're in scope for all paths
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(64 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Rate limiting guards /api/* only; /health sits outside it.
	let api_routes = Router::new()
		.route("/api/aggregator/quote", get(get_quote))
		.route("/api/aggregator/quote/", get(get_quote))
		.route("/api/aggregator/prepare-swap", post(prepare_swap))
		.route("/api/aggregator/prepare-swap/", post(prepare_swap))
		.layer(middleware::from_fn_with_state(
			state.clone(),
			rate_limit_middleware,
		));

	Router::new()
		.route("/health", get(health))
		.route("/health/", get(health))
		.merge(api_routes)
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit)
		.with_state(state)
}

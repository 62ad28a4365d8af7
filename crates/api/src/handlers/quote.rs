use axum::extract::{Query, State};
use axum::response::Json;
use dexgate_types::{CacheEntry, QuoteParams, QuoteResponse};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/aggregator/quote - cached, normalized quote from the first
/// responsive provider
pub async fn get_quote(
	State(state): State<AppState>,
	Query(params): Query<QuoteParams>,
) -> Result<Json<QuoteResponse>, ApiError> {
	let request = params.validate().map_err(|err| {
		debug!(error = %err, "rejecting quote request");
		ApiError::MissingParam
	})?;

	let key = request.cache_key();
	if let Some(entry) = state.quote_cache.get(&key).await {
		debug!(key = %key, "serving quote from cache");
		return Ok(Json(QuoteResponse::replayed(entry.value)));
	}

	let quote = state.aggregator.fetch_quote(&request).await?;
	state
		.quote_cache
		.set(key, CacheEntry::new(quote.clone()))
		.await;

	Ok(Json(QuoteResponse::fresh(quote)))
}

use axum::extract::State;
use axum::response::Json;
use dexgate_types::{PreparedSwap, SwapPrepareParams};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/aggregator/prepare-swap - raw swap payload from the first
/// responsive provider, uncached
pub async fn prepare_swap(
	State(state): State<AppState>,
	Json(params): Json<SwapPrepareParams>,
) -> Result<Json<PreparedSwap>, ApiError> {
	let request = params.validate().map_err(|err| {
		debug!(error = %err, "rejecting prepare-swap request");
		ApiError::MissingBodyParam
	})?;

	let swap = state.aggregator.prepare_swap(&request).await?;
	Ok(Json(swap))
}

//! API error mapping
//!
//! Every failure surfaces as a small generic body; adapter internals and
//! stack traces never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dexgate_types::AggregatorError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Wire shape for all error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
	pub error: String,
}

/// HTTP-facing error taxonomy
///
/// The display strings are the exact wire messages.
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("missing param")]
	MissingParam,

	#[error("missing body param")]
	MissingBodyParam,

	#[error("no liquidity from providers")]
	NoLiquidity,

	#[error("no swap payload available")]
	NoSwapPayload,

	#[error("too many requests")]
	RateLimited,

	#[error("internal")]
	Internal,
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::MissingParam | ApiError::MissingBodyParam => StatusCode::BAD_REQUEST,
			ApiError::NoLiquidity | ApiError::NoSwapPayload => StatusCode::BAD_GATEWAY,
			ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
			ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(
			self.status(),
			Json(ErrorBody {
				error: self.to_string(),
			}),
		)
			.into_response()
	}
}

impl From<AggregatorError> for ApiError {
	fn from(err: AggregatorError) -> Self {
		match err {
			AggregatorError::NoLiquidity => ApiError::NoLiquidity,
			AggregatorError::NoSwapPayload => ApiError::NoSwapPayload,
			AggregatorError::Internal { reason } => {
				error!(%reason, "aggregation failed unexpectedly");
				ApiError::Internal
			},
		}
	}
}

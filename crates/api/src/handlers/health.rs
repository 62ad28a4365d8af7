use axum::response::Json;
use serde::{Deserialize, Serialize};

/// Liveness response: process identity, no aggregation logic involved
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
	pub ok: bool,
	pub pid: u32,
}

/// GET /health - liveness probe, outside the rate limiter
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse {
		ok: true,
		pid: std::process::id(),
	})
}

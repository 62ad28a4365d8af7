//! Error types for provider adapters and the HTTP transport

use thiserror::Error;

use super::ProviderId;

/// Errors from the injected HTTP transport
#[derive(Error, Debug)]
pub enum TransportError {
	#[error("request failed: {0}")]
	Request(String),

	#[error("invalid header value: {0}")]
	InvalidHeader(String),
}

/// Adapter-internal failure modes
///
/// These never cross the `QuoteProvider` boundary; adapters log them and
/// hand the orchestrator a plain `None`.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("transport error: {0}")]
	Transport(#[from] TransportError),

	#[error("HTTP {status}")]
	HttpStatus { status: u16 },

	#[error("invalid JSON payload: {0}")]
	InvalidJson(#[from] serde_json::Error),

	#[error("credentials not configured")]
	NotConfigured,

	#[error("retries exhausted after {attempts} attempts")]
	RetriesExhausted { attempts: u32 },

	#[error("provider already registered: {0}")]
	AlreadyRegistered(ProviderId),
}

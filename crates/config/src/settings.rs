//! Configuration settings structures

use dexgate_types::SecretString;
use serde::Deserialize;

/// Main application settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProviderSettings,
	pub cache: CacheSettings,
	pub rate_limit: RateLimitSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl ServerSettings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 4000,
		}
	}
}

/// Upstream provider configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
	/// Chain all quotes are scoped to (Base mainnet)
	pub chain_id: u64,
	/// Taker address sent to providers that require one when the caller
	/// supplied none
	pub taker_address: String,
	pub zerox: ZeroExSettings,
	pub oneinch: OneInchSettings,
	pub okx: OkxSettings,
	pub dexflow: DexFlowSettings,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			chain_id: 8453,
			taker_address: "0x0000000000000000000000000000000000000000".to_string(),
			zerox: ZeroExSettings::default(),
			oneinch: OneInchSettings::default(),
			okx: OkxSettings::default(),
			dexflow: DexFlowSettings::default(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ZeroExSettings {
	pub endpoint: String,
	pub api_key: Option<SecretString>,
}

impl Default for ZeroExSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://api.0x.org".to_string(),
			api_key: None,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OneInchSettings {
	pub endpoint: String,
	pub api_key: Option<SecretString>,
}

impl Default for OneInchSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://api.1inch.io".to_string(),
			api_key: None,
		}
	}
}

/// OKX settings, including the signed-request credential triple
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OkxSettings {
	pub endpoint: String,
	pub api_key: Option<SecretString>,
	pub api_secret: Option<SecretString>,
	pub api_passphrase: Option<SecretString>,
	pub max_retries: u32,
	pub retry_backoff_ms: u64,
}

impl OkxSettings {
	/// Whether all three credentials are present. Anything less means the
	/// provider is skipped without a network call.
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some() && self.api_secret.is_some() && self.api_passphrase.is_some()
	}
}

impl Default for OkxSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://www.okx.com".to_string(),
			api_key: None,
			api_secret: None,
			api_passphrase: None,
			max_retries: 3,
			retry_backoff_ms: 200,
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DexFlowSettings {
	pub endpoint: String,
}

impl Default for DexFlowSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://api.dexflow.dev".to_string(),
		}
	}
}

/// Quote cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
	pub ttl_ms: u64,
}

impl Default for CacheSettings {
	fn default() -> Self {
		Self { ttl_ms: 5_000 }
	}
}

/// Rate limiting configuration for `/api/*` routes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub max_requests: u32,
	pub window_secs: u64,
}

impl Default for RateLimitSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			max_requests: 20,
			window_secs: 15,
		}
	}
}

/// Timeout configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Per-request timeout for outbound provider HTTP calls
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 10_000 }
	}
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	#[default]
	Compact,
}

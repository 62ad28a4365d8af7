//! Dexgate
//!
//! A multi-provider swap-quote aggregation gateway: one HTTP service that
//! queries independent upstream pricing providers in a deterministic
//! fallback order, normalizes their responses into one canonical quote, and
//! shields upstreams with a short-TTL cache and request rate limiting.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types - the most commonly used types
pub use dexgate_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AggregatedQuote,
	// Error types
	AggregatorError,
	CacheEntry,
	HttpTransport,
	NormalizedQuote,
	PreparedSwap,
	ProviderId,
	// Primary domain entities
	QuoteCache,
	QuoteProvider,
	QuoteRequest,
	QuoteResponse,
	QuoteValidationError,
	RateLimiter,
	SecretString,
	SwapPrepareRequest,
};

// Service layer
pub use dexgate_service::{
	AggregatorService, AggregatorTrait, QUOTE_PROVIDER_ORDER, SWAP_PROVIDER_ORDER,
};

// Cache layer
pub use dexgate_cache::MemoryQuoteCache;

// API layer
pub use dexgate_api::{create_router, ApiError, AppState, MemoryRateLimiter, NoopRateLimiter};

// Providers
pub use dexgate_providers::{
	DexFlowProvider, OkxProvider, OkxSigner, OneInchProvider, ProviderRegistry, ReqwestTransport,
	ZeroExProvider,
};

// Config
pub use dexgate_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for qualified access
pub mod types {
	pub use dexgate_types::*;
}

pub mod cache {
	pub use dexgate_cache::*;
}

pub mod config {
	pub use dexgate_config::*;
}

pub mod providers {
	pub use dexgate_providers::*;
}

pub mod api {
	pub use dexgate_api::*;
}

pub mod service {
	pub use dexgate_service::*;
}

pub mod mocks;

// Re-export external dependencies for examples
pub use async_trait;

/// Builder pattern for configuring the gateway
///
/// Every collaborator is injectable: settings, cache, rate limiter, HTTP
/// transport, and the provider set itself. Defaults reproduce the
/// production wiring.
#[derive(Default)]
pub struct GatewayBuilder {
	settings: Option<Settings>,
	cache: Option<Arc<dyn QuoteCache>>,
	rate_limiter: Option<Arc<dyn RateLimiter>>,
	transport: Option<Arc<dyn HttpTransport>>,
	providers: Vec<Arc<dyn QuoteProvider>>,
}

impl GatewayBuilder {
	/// Create a new gateway builder with default wiring
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Set a custom quote cache
	pub fn with_cache(mut self, cache: Arc<dyn QuoteCache>) -> Self {
		self.cache = Some(cache);
		self
	}

	/// Set a custom rate limiter
	pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiter>) -> Self {
		self.rate_limiter = Some(rate_limiter);
		self
	}

	/// Set a custom HTTP transport shared by all default providers
	pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Register a provider adapter
	///
	/// When any providers are registered this way, they replace the default
	/// set entirely; the fallback orders still apply by provider identity.
	pub fn with_provider(mut self, provider: Arc<dyn QuoteProvider>) -> Self {
		self.providers.push(provider);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use dexgate_config::LogFormat;

		// Create env filter using config level or environment variable
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the gateway and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let Self {
			settings,
			cache,
			rate_limiter,
			transport,
			providers,
		} = self;
		let settings = settings.unwrap_or_default();

		let transport: Arc<dyn HttpTransport> = match transport {
			Some(transport) => transport,
			None => Arc::new(ReqwestTransport::new(settings.timeouts.request_ms)?),
		};

		let registry = if providers.is_empty() {
			ProviderRegistry::with_defaults(&settings.providers, transport)
		} else {
			let mut registry = ProviderRegistry::new();
			for provider in providers {
				registry.register(provider)?;
			}
			registry
		};
		info!("Initialized with {} provider(s)", registry.len());

		let aggregator = AggregatorService::new(Arc::new(registry));

		let quote_cache: Arc<dyn QuoteCache> = cache
			.unwrap_or_else(|| Arc::new(MemoryQuoteCache::new(settings.cache.ttl_ms)));

		let rate_limiter: Arc<dyn RateLimiter> = match rate_limiter {
			Some(rate_limiter) => rate_limiter,
			None if settings.rate_limit.enabled => Arc::new(MemoryRateLimiter::new(
				settings.rate_limit.max_requests,
				settings.rate_limit.window_secs,
			)),
			None => Arc::new(NoopRateLimiter),
		};

		let state = AppState {
			aggregator: Arc::new(aggregator),
			quote_cache,
			rate_limiter,
		};
		let router = create_router(state.clone());

		Ok((router, state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Handles everything needed to run the gateway: loading `.env`,
	/// loading configuration, initializing tracing, and binding the
	/// listener.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info();

		// Log whether OKX credentials are loaded (never the values)
		info!(
			configured = settings.providers.okx.is_configured(),
			"OKX credentials present"
		);
		info!(
			enabled = settings.rate_limit.enabled,
			max_requests = settings.rate_limit.max_requests,
			window_secs = settings.rate_limit.window_secs,
			"Rate limiting"
		);

		let bind_addr = settings.server.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /api/aggregator/quote");
		info!("  POST /api/aggregator/prepare-swap");
		info!("  GET  /health");

		axum::serve(listener, app).await?;

		Ok(())
	}
}

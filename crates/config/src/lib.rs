//! Dexgate Config
//!
//! Settings structures, file/environment loading, and startup logging for
//! the dexgate gateway.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{apply_env_overrides, load_config};
pub use settings::{
	CacheSettings, DexFlowSettings, LogFormat, LoggingSettings, OkxSettings, OneInchSettings,
	ProviderSettings, RateLimitSettings, ServerSettings, Settings, TimeoutSettings,
	ZeroExSettings,
};
pub use startup_logger::{log_service_info, log_startup_complete};

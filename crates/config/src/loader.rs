//! Configuration loading utilities
//!
//! Settings come from three layers: struct defaults, an optional
//! `config/config.toml` file, and environment variables. The environment
//! wins, and legacy variable names are still honored.

use crate::Settings;
use config::{Config, ConfigError, File};
use tracing::warn;

/// Load configuration from the config file and the process environment
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;
	apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
	Ok(settings)
}

/// Apply environment overrides through a lookup function
///
/// Taking the lookup as a parameter keeps this testable without mutating
/// process-global environment state. An empty value counts as unset.
pub fn apply_env_overrides<F>(settings: &mut Settings, get: F)
where
	F: Fn(&str) -> Option<String>,
{
	let get = |name: &str| get(name).filter(|v| !v.is_empty());
	let first = |names: &[&str]| names.iter().copied().find_map(|n| get(n));

	if let Some(host) = get("HOST") {
		settings.server.host = host;
	}
	if let Some(port) = get("PORT") {
		match port.parse() {
			Ok(port) => settings.server.port = port,
			Err(_) => warn!(value = %port, "ignoring invalid PORT override"),
		}
	}

	// ARCX_EXCHANGE is the legacy name for the OKX API key
	if let Some(key) = first(&["OKX_API_KEY", "ARCX_EXCHANGE"]) {
		settings.providers.okx.api_key = Some(key.into());
	}
	if let Some(secret) = get("OKX_API_SECRET") {
		settings.providers.okx.api_secret = Some(secret.into());
	}
	if let Some(passphrase) = get("OKX_API_PASSPHRASE") {
		settings.providers.okx.api_passphrase = Some(passphrase.into());
	}

	if let Some(key) = first(&["ZEROX_API_KEY", "OX_API_KEY", "ZX_API_KEY"]) {
		settings.providers.zerox.api_key = Some(key.into());
	}
	if let Some(key) = get("ONEINCH_API_KEY") {
		settings.providers.oneinch.api_key = Some(key.into());
	}

	if let Some(taker) = get("QUOTE_TAKER_ADDRESS") {
		settings.providers.taker_address = taker;
	}
}

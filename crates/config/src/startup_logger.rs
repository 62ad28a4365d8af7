//! Service startup logging for the dexgate gateway

use std::env;
use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	info!("=== Dexgate Gateway Starting ===");
	info!(
		"🚀 Service: {} v{}",
		env!("CARGO_PKG_NAME"),
		env!("CARGO_PKG_VERSION")
	);
	info!("💻 Platform: {}/{}", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ Dexgate Gateway Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}

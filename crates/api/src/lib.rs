//! Dexgate API
//!
//! HTTP routing, error mapping, and rate limiting for the gateway.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod rate_limit;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use rate_limit::{MemoryRateLimiter, NoopRateLimiter};
pub use router::create_router;
pub use state::AppState;

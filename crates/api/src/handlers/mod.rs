//! HTTP request handlers

pub mod health;
pub mod quote;
pub mod swap;

pub use health::health;
pub use quote::get_quote;
pub use swap::prepare_swap;

//! Provider identity, traits, and error types

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, TransportError};
pub use traits::{HttpTransport, QuoteProvider, TransportResponse};

/// Result type for provider-internal operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// The fixed set of upstream pricing providers
///
/// The enum variant, not the adapter's type or function name, is the
/// `source` tag on every gateway response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderId {
	ZeroX,
	OneInch,
	Okx,
	Dexflow,
}

impl ProviderId {
	pub const ALL: [ProviderId; 4] = [
		ProviderId::ZeroX,
		ProviderId::OneInch,
		ProviderId::Okx,
		ProviderId::Dexflow,
	];

	/// The wire name for this provider, as used in the `source` field.
	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderId::ZeroX => "zeroX",
			ProviderId::OneInch => "oneInch",
			ProviderId::Okx => "okx",
			ProviderId::Dexflow => "dexflow",
		}
	}
}

impl fmt::Display for ProviderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn provider_ids_serialize_to_wire_names() {
		for id in ProviderId::ALL {
			let serialized = serde_json::to_value(id).unwrap();
			assert_eq!(serialized, id.as_str());
		}
	}

	#[test]
	fn provider_ids_round_trip() {
		let id: ProviderId = serde_json::from_str("\"oneInch\"").unwrap();
		assert_eq!(id, ProviderId::OneInch);
	}
}

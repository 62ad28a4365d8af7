//! Dexgate Providers
//!
//! One adapter per upstream pricing provider, the OKX request signer, the
//! injectable HTTP transport, and the provider registry.

pub mod dexflow;
pub mod okx;
pub mod oneinch;
pub mod signing;
pub mod transport;
pub mod zerox;

#[cfg(test)]
pub(crate) mod test_transport;

pub use dexflow::DexFlowProvider;
pub use okx::OkxProvider;
pub use oneinch::OneInchProvider;
pub use signing::{OkxSigner, SignedHeaders};
pub use transport::ReqwestTransport;
pub use zerox::ZeroExProvider;

pub use dexgate_types::{HttpTransport, ProviderError, ProviderId, ProviderResult, QuoteProvider};

use dexgate_config::ProviderSettings;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of provider adapters keyed by their identity
#[derive(Debug, Default)]
pub struct ProviderRegistry {
	providers: HashMap<ProviderId, Arc<dyn QuoteProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self {
			providers: HashMap::new(),
		}
	}

	/// Create a registry with all four production adapters wired to the
	/// given transport.
	pub fn with_defaults(settings: &ProviderSettings, transport: Arc<dyn HttpTransport>) -> Self {
		let mut registry = Self::new();
		let providers: [Arc<dyn QuoteProvider>; 4] = [
			Arc::new(ZeroExProvider::new(settings, Arc::clone(&transport))),
			Arc::new(OneInchProvider::new(settings, Arc::clone(&transport))),
			Arc::new(OkxProvider::new(settings, Arc::clone(&transport))),
			Arc::new(DexFlowProvider::new(settings, transport)),
		];
		for provider in providers {
			registry.providers.insert(provider.id(), provider);
		}
		registry
	}

	/// Register an adapter under its own identity.
	pub fn register(&mut self, provider: Arc<dyn QuoteProvider>) -> ProviderResult<()> {
		match self.providers.entry(provider.id()) {
			Entry::Occupied(_) => Err(ProviderError::AlreadyRegistered(provider.id())),
			Entry::Vacant(slot) => {
				slot.insert(provider);
				Ok(())
			},
		}
	}

	pub fn get(&self, id: ProviderId) -> Option<&Arc<dyn QuoteProvider>> {
		self.providers.get(&id)
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

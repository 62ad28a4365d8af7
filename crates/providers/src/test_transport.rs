//! Scripted transport for adapter unit tests

use async_trait::async_trait;
use dexgate_types::{HttpTransport, TransportError, TransportResponse};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Transport that replays a fixed script of responses and records every call
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
	responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
	calls: AtomicUsize,
	urls: Mutex<Vec<String>>,
	headers_seen: Mutex<Vec<HashMap<String, String>>>,
}

impl ScriptedTransport {
	pub fn new(responses: Vec<Result<TransportResponse, TransportError>>) -> Self {
		Self {
			responses: Mutex::new(responses.into()),
			..Self::default()
		}
	}

	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	pub fn replying(status: u16, body: &str) -> Self {
		Self::new(vec![Ok(TransportResponse {
			status,
			body: body.to_string(),
		})])
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn last_url(&self) -> String {
		self.urls.lock().unwrap().last().cloned().unwrap_or_default()
	}

	pub fn last_headers(&self) -> HashMap<String, String> {
		self.headers_seen
			.lock()
			.unwrap()
			.last()
			.cloned()
			.unwrap_or_default()
	}
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
	async fn get(
		&self,
		url: &str,
		headers: &HashMap<String, String>,
	) -> Result<TransportResponse, TransportError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.urls.lock().unwrap().push(url.to_string());
		self.headers_seen.lock().unwrap().push(headers.clone());

		self.responses
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Err(TransportError::Request("script exhausted".to_string())))
	}
}

//! HMAC-SHA256 request signing for the OKX-style authenticated provider

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, Utc};
use dexgate_config::OkxSettings;
use dexgate_types::SecretString;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Headers produced by a signing attempt
///
/// `configured: false` carries only the generic headers and means "skip
/// this provider", not an error.
#[derive(Debug, Clone)]
pub struct SignedHeaders {
	pub headers: HashMap<String, String>,
	pub configured: bool,
}

/// Signer for OKX-style authenticated requests
///
/// Pure function of method, path, body, and the credential triple; the only
/// ambient input is the signing timestamp.
#[derive(Debug, Clone)]
pub struct OkxSigner {
	api_key: Option<SecretString>,
	api_secret: Option<SecretString>,
	api_passphrase: Option<SecretString>,
}

impl OkxSigner {
	pub fn new(
		api_key: Option<SecretString>,
		api_secret: Option<SecretString>,
		api_passphrase: Option<SecretString>,
	) -> Self {
		Self {
			api_key,
			api_secret,
			api_passphrase,
		}
	}

	pub fn from_settings(settings: &OkxSettings) -> Self {
		Self::new(
			settings.api_key.clone(),
			settings.api_secret.clone(),
			settings.api_passphrase.clone(),
		)
	}

	pub fn is_configured(&self) -> bool {
		self.api_key.is_some() && self.api_secret.is_some() && self.api_passphrase.is_some()
	}

	/// Sign a request with a timestamp taken at call time.
	///
	/// The timestamp participates in the upstream signature validity
	/// window, so it is generated here rather than cached anywhere.
	pub fn sign(&self, method: &str, request_path: &str, body: &str) -> SignedHeaders {
		self.sign_at(method, request_path, body, Utc::now())
	}

	/// Timestamp-injectable signing, used directly by tests.
	pub fn sign_at(
		&self,
		method: &str,
		request_path: &str,
		body: &str,
		signed_at: DateTime<Utc>,
	) -> SignedHeaders {
		let mut headers = base_headers();

		let (Some(key), Some(secret), Some(passphrase)) =
			(&self.api_key, &self.api_secret, &self.api_passphrase)
		else {
			return SignedHeaders {
				headers,
				configured: false,
			};
		};

		// ISO-8601 with millisecond precision, e.g. 2026-08-06T12:34:56.789Z
		let timestamp = signed_at.to_rfc3339_opts(SecondsFormat::Millis, true);
		let prehash = format!(
			"{}{}{}{}",
			timestamp,
			method.to_uppercase(),
			request_path,
			body
		);

		let mut mac = match HmacSha256::new_from_slice(secret.expose_secret().as_bytes()) {
			Ok(mac) => mac,
			Err(err) => {
				warn!(error = %err, "failed to initialize request signer");
				return SignedHeaders {
					headers,
					configured: false,
				};
			},
		};
		mac.update(prehash.as_bytes());
		let signature = BASE64.encode(mac.finalize().into_bytes());

		headers.insert("OK-ACCESS-KEY".to_string(), key.expose_secret().to_string());
		headers.insert("OK-ACCESS-SIGN".to_string(), signature);
		headers.insert("OK-ACCESS-TIMESTAMP".to_string(), timestamp);
		headers.insert(
			"OK-ACCESS-PASSPHRASE".to_string(),
			passphrase.expose_secret().to_string(),
		);

		SignedHeaders {
			headers,
			configured: true,
		}
	}
}

/// Generic headers attached to every request, signed or not
pub(crate) fn base_headers() -> HashMap<String, String> {
	HashMap::from([
		("Accept".to_string(), "application/json".to_string()),
		("Content-Type".to_string(), "application/json".to_string()),
		("User-Agent".to_string(), "Dexgate/1.0".to_string()),
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn configured_signer() -> OkxSigner {
		OkxSigner::new(
			Some("test-key".into()),
			Some("test-secret".into()),
			Some("test-passphrase".into()),
		)
	}

	fn fixed_time() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
	}

	#[test]
	fn missing_any_credential_yields_unconfigured_headers() {
		let partials = [
			OkxSigner::new(None, Some("s".into()), Some("p".into())),
			OkxSigner::new(Some("k".into()), None, Some("p".into())),
			OkxSigner::new(Some("k".into()), Some("s".into()), None),
		];

		for signer in partials {
			assert!(!signer.is_configured());
			let signed = signer.sign("GET", "/api/v5/dex/aggregator/quote", "");
			assert!(!signed.configured);
			assert!(signed.headers.contains_key("Accept"));
			assert!(!signed
				.headers
				.keys()
				.any(|name| name.starts_with("OK-ACCESS")));
		}
	}

	#[test]
	fn full_credentials_produce_all_signature_headers() {
		let signed = configured_signer().sign_at("GET", "/api/v5/quote?a=1", "", fixed_time());

		assert!(signed.configured);
		assert_eq!(signed.headers["OK-ACCESS-KEY"], "test-key");
		assert_eq!(signed.headers["OK-ACCESS-PASSPHRASE"], "test-passphrase");
		assert_eq!(signed.headers["OK-ACCESS-TIMESTAMP"], "2026-08-06T12:00:00.000Z");

		// HMAC-SHA256 output is 32 bytes; the header carries it base64-encoded.
		let raw = BASE64.decode(&signed.headers["OK-ACCESS-SIGN"]).unwrap();
		assert_eq!(raw.len(), 32);
	}

	#[test]
	fn signature_is_deterministic_for_fixed_inputs() {
		let signer = configured_signer();
		let a = signer.sign_at("get", "/path?x=1", "", fixed_time());
		let b = signer.sign_at("GET", "/path?x=1", "", fixed_time());

		// Method is upcased before hashing, so case does not change the prehash.
		assert_eq!(a.headers["OK-ACCESS-SIGN"], b.headers["OK-ACCESS-SIGN"]);
	}

	#[test]
	fn signature_covers_path_body_and_secret() {
		let signer = configured_signer();
		let base = signer.sign_at("GET", "/path?x=1", "", fixed_time());

		let other_path = signer.sign_at("GET", "/path?x=2", "", fixed_time());
		assert_ne!(
			base.headers["OK-ACCESS-SIGN"],
			other_path.headers["OK-ACCESS-SIGN"]
		);

		let with_body = signer.sign_at("GET", "/path?x=1", "{\"a\":1}", fixed_time());
		assert_ne!(
			base.headers["OK-ACCESS-SIGN"],
			with_body.headers["OK-ACCESS-SIGN"]
		);

		let other_secret = OkxSigner::new(
			Some("test-key".into()),
			Some("other-secret".into()),
			Some("test-passphrase".into()),
		)
		.sign_at("GET", "/path?x=1", "", fixed_time());
		assert_ne!(
			base.headers["OK-ACCESS-SIGN"],
			other_secret.headers["OK-ACCESS-SIGN"]
		);
	}
}

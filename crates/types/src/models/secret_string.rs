//! Secure string handling for sensitive data like API keys
//!
//! This module provides a `SecretString` type that uses zeroize to securely
//! clear sensitive data from memory when dropped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string type that zeroizes its contents when dropped
///
/// Holds API keys, secrets, and passphrases. The underlying data is cleared
/// from memory on drop, and both `Debug` and `Display` redact the value.
///
/// # Examples
///
/// ```rust
/// use dexgate_types::SecretString;
///
/// let api_key = SecretString::from("secret-api-key-12345");
/// assert_eq!(api_key.expose_secret(), "secret-api-key-12345");
/// assert_eq!(format!("{}", api_key), "[REDACTED]");
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Expose the secret value
	///
	/// Use sparingly, only at the point the value is actually consumed
	/// (signing, header construction).
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	/// Get the length of the secret without exposing it
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Check if the secret is empty without exposing it
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}

// Deserializes from a plain string so secrets can come from config files
// and environment variables; serialization never emits the value.
impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer).map(Self::new)
	}
}

impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

//! Redacted holder for the client secret and issued access tokens.

// crates.io
use jsonwebtoken::EncodingKey;
// self
use crate::_prelude::*;

/// Sensitive string shared between the credentials, the token state, and outgoing headers.
///
/// Clones share one allocation, so handing an access token to callers does not copy it.
/// Formatting never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Arc<str>);
impl Secret {
	/// Wraps a sensitive value.
	pub fn new(value: impl Into<String>) -> Self {
		Self(Arc::from(value.into()))
	}

	/// Returns the raw value. Callers must avoid logging it.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// `Authorization` header value carrying this secret as a bearer token.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.0)
	}

	pub(crate) fn hmac_key(&self) -> EncodingKey {
		EncodingKey::from_secret(self.0.as_bytes())
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Secret({} bytes, redacted)", self.0.len())
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_hides_the_value() {
		let secret = Secret::new("tok-123");

		assert_eq!(format!("{secret:?}"), "Secret(7 bytes, redacted)");
		assert_eq!(secret.to_string(), "<redacted>");
		assert_eq!(secret.bearer(), "Bearer tok-123");
	}

	#[test]
	fn clones_share_the_value() {
		let secret = Secret::new("tok-123");
		let clone = secret.clone();

		assert_eq!(clone, secret);
		assert!(std::ptr::eq(clone.expose(), secret.expose()));
	}
}

//! JWT-bearer token acquisition and expiry tracking.
//!
//! [`TokenManager`] mints a signed assertion, posts it to the platform's token endpoint,
//! and keeps the resulting [`TokenState`]. Callers decide what to do with failures; the
//! client logs and absorbs them so authentication problems surface as the remote's own
//! 401 responses instead of construction errors.

// self
use crate::{
	_prelude::*,
	auth::{AssertionClaims, Credentials, JWT_BEARER_GRANT, TokenState},
	error::{TokenError, TransportError},
	http::{HttpRequest, HttpTransport},
	resource::Method,
};

const BODY_PREVIEW_LIMIT: usize = 256;

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
}

/// Owns the token endpoint, the client identity, and the current [`TokenState`].
pub struct TokenManager {
	credentials: Credentials,
	endpoint: Url,
	timeout: Duration,
	state: Mutex<TokenState>,
}
impl TokenManager {
	/// Creates a manager with no token.
	pub fn new(credentials: Credentials, endpoint: Url, timeout: Duration) -> Self {
		Self { credentials, endpoint, timeout, state: Mutex::new(TokenState::default()) }
	}

	/// Token endpoint used as both request target and assertion audience.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// Client identity used to sign assertions.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Snapshot of the current token state.
	pub fn state(&self) -> TokenState {
		self.state.lock().clone()
	}

	/// Returns `true` if a token exists and has expired at `now`.
	///
	/// A client that never obtained a token does not refresh; its calls go out without
	/// an `Authorization` header.
	pub fn needs_refresh(&self, now: OffsetDateTime) -> bool {
		self.state.lock().is_expired_at(now)
	}

	/// Performs one token exchange and, on success, replaces the stored state.
	///
	/// The previous state is left untouched on failure.
	pub fn acquire<T>(&self, transport: &T, now: OffsetDateTime) -> Result<TokenState, TokenError>
	where
		T: ?Sized + HttpTransport,
	{
		let state = self.exchange(transport, now)?;

		*self.state.lock() = state.clone();

		Ok(state)
	}

	fn exchange<T>(&self, transport: &T, now: OffsetDateTime) -> Result<TokenState, TokenError>
	where
		T: ?Sized + HttpTransport,
	{
		let assertion = AssertionClaims::new(&self.credentials, &self.endpoint, now)
			.sign(self.credentials.client_secret())?;
		let form = url::form_urlencoded::Serializer::new(String::new())
			.append_pair("grant_type", JWT_BEARER_GRANT)
			.append_pair("assertion", &assertion)
			.finish();
		let request = HttpRequest::new(Method::Post, self.endpoint.as_str())
			.with_header("Content-Type", "application/x-www-form-urlencoded")
			.with_body(form.into_bytes())
			.with_timeout(self.timeout);
		let response = transport
			.send(request)
			.map_err(|e| TransportError::network(self.endpoint.as_str(), e))?;

		if !response.is_success() {
			return Err(TokenError::Endpoint {
				status: response.status,
				body_preview: truncate_preview(&response.body),
			});
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&response.body);
		let parsed: TokenResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| TokenError::ResponseParse { source, status: response.status })?;

		Ok(TokenState::issued(parsed.access_token, now))
	}
}
impl Debug for TokenManager {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenManager")
			.field("credentials", &self.credentials)
			.field("endpoint", &self.endpoint.as_str())
			.field("timeout", &self.timeout)
			.field("state", &*self.state.lock())
			.finish()
	}
}

fn truncate_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);

	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return text.into_owned();
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn previews_are_truncated_on_char_boundaries() {
		let long = "é".repeat(BODY_PREVIEW_LIMIT + 10);
		let preview = truncate_preview(long.as_bytes());

		assert_eq!(preview.chars().count(), BODY_PREVIEW_LIMIT + 1);
		assert!(preview.ends_with('…'));
		assert_eq!(truncate_preview(b"short"), "short");
	}
}

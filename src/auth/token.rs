//! Bearer token state tracked by each client.

// self
use crate::{_prelude::*, auth::Secret};

/// Current bearer token plus its issue and expiry instants.
///
/// The state starts empty and is replaced wholesale by every successful acquisition. It is
/// never cleared explicitly; an expired token is renewed lazily before the next call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenState {
	/// Access token secret; callers must avoid logging it.
	pub access_token: Option<Secret>,
	/// Instant the token was stored.
	pub issued_at: Option<OffsetDateTime>,
	/// Instant after which the token is renewed before use.
	pub expires_at: Option<OffsetDateTime>,
}
impl TokenState {
	/// Local lifetime granted to a fresh token; kept below the remote's 60-minute lifetime.
	pub const LIFETIME: Duration = Duration::seconds(3300);

	/// Builds the state for a token stored at `issued_at`.
	pub fn issued(access_token: impl Into<String>, issued_at: OffsetDateTime) -> Self {
		Self {
			access_token: Some(Secret::new(access_token)),
			issued_at: Some(issued_at),
			expires_at: Some(issued_at + Self::LIFETIME),
		}
	}

	/// Returns `true` once a token has been acquired.
	pub fn is_present(&self) -> bool {
		self.access_token.is_some()
	}

	/// Returns `true` if a token exists and `instant` is strictly past its expiry.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		match (&self.access_token, self.expires_at) {
			(Some(_), Some(expires_at)) => instant > expires_at,
			_ => false,
		}
	}

	/// `Authorization` header value, if a token is present.
	pub fn authorization(&self) -> Option<String> {
		self.access_token.as_ref().map(Secret::bearer)
	}
}
impl Debug for TokenState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenState")
			.field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn fresh_tokens_expire_after_fifty_five_minutes() {
		let issued = macros::datetime!(2025-01-01 00:00 UTC);
		let state = TokenState::issued("access", issued);

		assert_eq!(state.expires_at, Some(macros::datetime!(2025-01-01 00:55 UTC)));
		assert!(!state.is_expired_at(macros::datetime!(2025-01-01 00:55 UTC)));
		assert!(state.is_expired_at(macros::datetime!(2025-01-01 00:55:01 UTC)));
		assert_eq!(state.authorization().as_deref(), Some("Bearer access"));
	}

	#[test]
	fn empty_state_never_reports_expiry() {
		let state = TokenState::default();

		assert!(!state.is_present());
		assert!(!state.is_expired_at(macros::datetime!(2100-01-01 00:00 UTC)));
		assert_eq!(state.authorization(), None);
		assert!(format!("{state:?}").contains("access_token: None"));
	}
}

//! Signed JWT assertions exchanged through the JWT-bearer grant.

// crates.io
use jsonwebtoken::{Algorithm, Header};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	error::TokenError,
};

/// OAuth 2.0 grant type identifier for JWT bearer assertions (RFC 7523).
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Claims carried by an assertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
	/// Issuer: the client key.
	pub iss: String,
	/// Audience: the token endpoint URL.
	pub aud: String,
	/// Issued-at, seconds since the Unix epoch.
	pub iat: i64,
	/// Expiry, seconds since the Unix epoch.
	pub exp: i64,
}
impl AssertionClaims {
	/// Lifetime of a freshly minted assertion.
	pub const LIFETIME: Duration = Duration::seconds(300);

	/// Builds claims for `credentials` targeting `audience`, issued at `now`.
	pub fn new(credentials: &Credentials, audience: &Url, now: OffsetDateTime) -> Self {
		let iat = now.unix_timestamp();

		Self {
			iss: credentials.client_key().to_owned(),
			aud: audience.to_string(),
			iat,
			exp: (now + Self::LIFETIME).unix_timestamp(),
		}
	}

	/// Signs the claims with HMAC-SHA256 using `secret`.
	pub fn sign(&self, secret: &Secret) -> Result<String, TokenError> {
		Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), self, &secret.hmac_key())?)
	}
}

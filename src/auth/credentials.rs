//! Server identifier plus the client key/secret pair used to sign assertions.

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Immutable client identity shared by the token manager and host resolution.
///
/// All three fields are mandatory strings. Empty strings are accepted here and rejected by
/// the remote identity service, which keeps construction free of network assumptions.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	server: String,
	client_key: String,
	client_secret: Secret,
}
impl Credentials {
	const SERVER: &'static str = "server";
	const CLIENT_KEY: &'static str = "client_key";
	const CLIENT_SECRET: &'static str = "client_secret";

	/// Creates credentials from the three string fields.
	pub fn new(
		server: impl Into<String>,
		client_key: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			server: server.into(),
			client_key: client_key.into(),
			client_secret: Secret::new(client_secret),
		}
	}

	/// Creates credentials from optional fields, failing on the first missing one.
	pub fn from_parts(
		server: Option<&str>,
		client_key: Option<&str>,
		client_secret: Option<&str>,
	) -> Result<Self, ConfigError> {
		let server = server.ok_or(ConfigError::MissingCredential { field: Self::SERVER })?;
		let client_key =
			client_key.ok_or(ConfigError::MissingCredential { field: Self::CLIENT_KEY })?;
		let client_secret =
			client_secret.ok_or(ConfigError::MissingCredential { field: Self::CLIENT_SECRET })?;

		Ok(Self::new(server, client_key, client_secret))
	}

	/// Reads credentials from a loosely typed JSON object
	/// (`{"server": .., "client_key": .., "client_secret": ..}`).
	///
	/// Absent or `null` fields yield [`ConfigError::MissingCredential`]; any other non-string
	/// value yields [`ConfigError::InvalidCredential`].
	pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
		fn field<'a>(value: &'a Value, name: &'static str) -> Result<&'a str, ConfigError> {
			match value.get(name) {
				None | Some(Value::Null) => Err(ConfigError::MissingCredential { field: name }),
				Some(Value::String(text)) => Ok(text),
				Some(_) => Err(ConfigError::InvalidCredential { field: name }),
			}
		}

		Ok(Self::new(
			field(value, Self::SERVER)?,
			field(value, Self::CLIENT_KEY)?,
			field(value, Self::CLIENT_SECRET)?,
		))
	}

	/// Server identifier (IFB server name or DFA account label).
	pub fn server(&self) -> &str {
		&self.server
	}

	/// Client key used as the assertion issuer.
	pub fn client_key(&self) -> &str {
		&self.client_key
	}

	/// Client secret used to sign assertions.
	pub fn client_secret(&self) -> &Secret {
		&self.client_secret
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("server", &self.server)
			.field("client_key", &self.client_key)
			.field("client_secret", &"<redacted>")
			.finish()
	}
}

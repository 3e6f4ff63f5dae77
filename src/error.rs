//! Client-level error types shared across the token manager, executor, and platforms.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Remote non-2xx responses are never mapped into this type; they come back as
/// [`ApiResponse`](crate::response::ApiResponse) values for the caller to inspect.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (credentials, options, resource lookups).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout) while calling a resource endpoint.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The executor only accepts GET, POST, PUT, and DELETE.
	#[error("`{method}` is not an accepted method.")]
	InvalidMethod {
		/// Upper-cased verb that was rejected.
		method: String,
	},
	/// The verb is not declared for the targeted resource.
	#[error("The `{method}` method is not allowed for {resource}.")]
	MethodNotAllowed {
		/// Upper-cased verb that was rejected.
		method: String,
		/// Resource name from the capability table.
		resource: String,
	},
}

/// Configuration and validation failures raised synchronously to the caller.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A required credential field was not supplied.
	#[error("Invalid API credentials: `{field}` is missing.")]
	MissingCredential {
		/// Credential field name.
		field: &'static str,
	},
	/// A credential field was supplied with a non-string value.
	#[error("Invalid API credentials: `{field}` must be a string.")]
	InvalidCredential {
		/// Credential field name.
		field: &'static str,
	},
	/// Region labels are lowercase ASCII letters and digits.
	#[error("Region `{region}` is invalid.")]
	InvalidRegion {
		/// Rejected region label.
		region: String,
	},
	/// API versions use the `major.minor` form (e.g. `8.0`).
	#[error("API version `{version}` is invalid.")]
	InvalidVersion {
		/// Rejected version string.
		version: String,
	},
	/// A host or endpoint could not be parsed into a URL.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL string.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The capability table has no entry for the resource.
	#[error("Resource `{resource}` is not defined for this platform.")]
	UnknownResource {
		/// Requested resource name.
		resource: String,
	},
	/// Path values do not line up with the template placeholders.
	#[error("Template `{template}` expects {expected} path value(s) but {supplied} were supplied.")]
	PathArity {
		/// URI template being expanded.
		template: String,
		/// Placeholder count in the template.
		expected: usize,
		/// Number of values the caller passed.
		supplied: usize,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ConfigError {
	fn from(e: reqwest::Error) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// Target URL of the failed exchange.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: impl Into<String>, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { url: url.into(), source: Box::new(src) }
	}
}

/// Token acquisition failures.
///
/// These are produced while exchanging a signed assertion for a bearer token. The client
/// logs and absorbs them so construction never fails on authentication problems; later calls
/// go out unauthenticated and receive the remote's own rejection.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// The JWT assertion could not be signed.
	#[error("Assertion could not be signed.")]
	Assertion(#[from] jsonwebtoken::errors::Error),
	/// The token endpoint could not be reached.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The token endpoint answered with a non-2xx status.
	#[error("Token endpoint returned HTTP {status}: {body_preview}.")]
	Endpoint {
		/// HTTP status code.
		status: u16,
		/// Truncated response body.
		body_preview: String,
	},
	/// The token endpoint answered with JSON that lacks a usable `access_token`.
	#[error("Token endpoint returned malformed JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code.
		status: u16,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn messages_name_the_offending_values() {
		let err = Error::MethodNotAllowed { method: "DELETE".into(), resource: "Profiles".into() };

		assert_eq!(err.to_string(), "The `DELETE` method is not allowed for Profiles.");

		let err: Error = ConfigError::MissingCredential { field: "client_secret" }.into();

		assert_eq!(err.to_string(), "Invalid API credentials: `client_secret` is missing.");
		assert!(matches!(err, Error::Config(ConfigError::MissingCredential { .. })));
	}
}

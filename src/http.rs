//! Transport primitives for token exchanges and resource calls.
//!
//! [`HttpTransport`] is the client's only dependency on an HTTP stack. Requests and
//! responses use the crate-owned [`HttpRequest`] and [`HttpResponse`] types so custom
//! transports (recording fakes, proxies, alternative clients) never depend on reqwest.
//! [`ReqwestHttpClient`] is the default implementation behind the `reqwest` feature.

// self
use crate::{_prelude::*, resource::Method};

/// Blocking HTTP transport shared by the token manager and the request executor.
///
/// Implementations own whatever connection state they need; one transport instance lives
/// as long as its client, so pooled connections are reused across calls.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted when no HTTP response could be obtained.
	type TransportError: 'static + Send + Sync + StdError;

	/// Performs one HTTP exchange.
	///
	/// Any HTTP status, including 4xx and 5xx, is a successful exchange and must be returned
	/// as an [`HttpResponse`].
	fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::TransportError>;
}

/// Outbound request handed to an [`HttpTransport`].
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP verb.
	pub method: Method,
	/// Absolute request URL.
	pub url: String,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(String, String)>,
	/// Raw request body.
	pub body: Option<Vec<u8>>,
	/// Per-request timeout, if any.
	pub timeout: Option<Duration>,
}
impl HttpRequest {
	/// Creates a request without headers or body.
	pub fn new(method: Method, url: impl Into<String>) -> Self {
		Self { method, url: url.into(), headers: Vec::new(), body: None, timeout: None }
	}

	/// Appends a header.
	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));

		self
	}

	/// Sets the request body.
	pub fn with_body(mut self, body: Vec<u8>) -> Self {
		self.body = Some(body);

		self
	}

	/// Sets the request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Returns the first header matching `name`, ignoring ASCII case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for HttpRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(name, value)| {
				if name.eq_ignore_ascii_case("authorization") {
					(name.as_str(), "<redacted>")
				} else {
					(name.as_str(), value.as_str())
				}
			})
			.collect::<Vec<_>>();

		f.debug_struct("HttpRequest")
			.field("method", &self.method)
			.field("url", &self.url)
			.field("headers", &headers)
			.field("body_len", &self.body.as_ref().map(Vec::len))
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Response returned by an [`HttpTransport`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response headers keyed by lower-cased name; repeated headers are joined with `", "`.
	pub headers: BTreeMap<String, String>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates an empty response with `status`.
	pub fn new(status: u16) -> Self {
		Self { status, ..Default::default() }
	}

	/// Adds (or extends) a header.
	pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
		self.append_header(name.as_ref(), value.as_ref());

		self
	}

	/// Sets the body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = body.into();

		self
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	fn append_header(&mut self, name: &str, value: &str) {
		self.headers
			.entry(name.to_ascii_lowercase())
			.and_modify(|existing| {
				existing.push_str(", ");
				existing.push_str(value);
			})
			.or_insert_with(|| value.to_owned());
	}
}

/// Thin wrapper around a blocking reqwest client so shared HTTP behavior lives in one place.
///
/// The wrapped client keeps its connection pool for the lifetime of the API client that owns
/// it. Do not construct or use it from inside an async runtime; reqwest's blocking client
/// drives its own.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub reqwest::blocking::Client);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with reqwest's defaults.
	pub fn new() -> Result<Self, crate::error::ConfigError> {
		Ok(Self(reqwest::blocking::Client::builder().build()?))
	}

	/// Wraps an existing blocking reqwest client.
	pub fn with_client(client: reqwest::blocking::Client) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<reqwest::blocking::Client> for ReqwestHttpClient {
	fn as_ref(&self) -> &reqwest::blocking::Client {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestTransportError;

	fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::TransportError> {
		let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
			.map_err(|_| ReqwestTransportError::UnsupportedMethod(request.method))?;
		let mut builder = self.0.request(method, &request.url);

		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = request.body {
			builder = builder.body(body);
		}
		if let Some(timeout) = request.timeout.and_then(|t| std::time::Duration::try_from(t).ok())
		{
			builder = builder.timeout(timeout);
		}

		let response = builder.send()?;
		let mut normalized = HttpResponse::new(response.status().as_u16());

		for (name, value) in response.headers() {
			if let Ok(value) = value.to_str() {
				normalized.append_header(name.as_str(), value);
			}
		}

		normalized.body = response.bytes()?.to_vec();

		Ok(normalized)
	}
}

/// Failures raised by [`ReqwestHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Debug, ThisError)]
pub enum ReqwestTransportError {
	/// reqwest failed to send the request or read the response.
	#[error(transparent)]
	Request(#[from] reqwest::Error),
	/// reqwest rejected the verb.
	#[error("HTTP method {0} is not supported by the transport.")]
	UnsupportedMethod(Method),
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn response_headers_are_case_insensitive_and_joined() {
		let response = HttpResponse::new(200)
			.with_header("Set-Cookie", "a=1")
			.with_header("set-cookie", "b=2")
			.with_header("Total-Count", "3");

		assert_eq!(response.headers.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
		assert_eq!(response.headers.get("total-count").map(String::as_str), Some("3"));
		assert!(response.is_success());
		assert!(!HttpResponse::new(429).is_success());
	}

	#[test]
	fn request_debug_redacts_authorization() {
		let request = HttpRequest::new(Method::Get, "https://h/profiles")
			.with_header("Authorization", "Bearer secret-token");

		assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
		assert!(!format!("{request:?}").contains("secret-token"));
	}
}

//! Client options recognized by both platforms.
//!
//! [`ClientOptions`] is an owned value; every client keeps its own copy so options never
//! alias across clients or calls. The type is serde-friendly, which lets callers keep the
//! options next to the rest of their configuration:
//!
//! ```
//! let options: zerion_api::ClientOptions =
//! 	serde_json::from_str(r#"{"region":"ca","version":8.0,"rate_limit_retry":true}"#).unwrap();
//!
//! assert_eq!(options.region.as_str(), "ca");
//! assert_eq!(options.version.path_segment(), "v80");
//! ```

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::ConfigError};

/// Deployment region label used in IFB host names (`us` is the unqualified default).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region(String);
impl Region {
	/// Default region served by the unprefixed hosts.
	pub const DEFAULT: &'static str = "us";

	/// Creates a region after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ConfigError> {
		let view = value.as_ref();

		if view.is_empty()
			|| !view.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
		{
			return Err(ConfigError::InvalidRegion { region: view.to_owned() });
		}

		Ok(Self(view.to_owned()))
	}

	/// Returns the region label.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns `true` for the unprefixed default region.
	pub fn is_default(&self) -> bool {
		self.0 == Self::DEFAULT
	}
}
impl Default for Region {
	fn default() -> Self {
		Self(Self::DEFAULT.into())
	}
}
impl Deref for Region {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<Region> for String {
	fn from(value: Region) -> Self {
		value.0
	}
}
impl TryFrom<String> for Region {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for Region {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for Region {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Region({})", self.0)
	}
}
impl Display for Region {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// IFB API version, rendered as `v{major}{minor}` in resource paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ApiVersion {
	/// Major version component.
	pub major: u8,
	/// Minor version component (single digit).
	pub minor: u8,
}
impl ApiVersion {
	/// Version 8.0, the default for new clients.
	pub const V8_0: Self = Self { major: 8, minor: 0 };

	/// Returns the path segment, e.g. `v80` for 8.0.
	pub fn path_segment(self) -> String {
		format!("v{}{}", self.major, self.minor)
	}

	/// Accepts at most one decimal place; `8.05` is rejected rather than rounded.
	fn from_number(value: f64) -> Result<Self, ConfigError> {
		let invalid = || ConfigError::InvalidVersion { version: value.to_string() };

		if !value.is_finite() || value < 0. || value >= 256. {
			return Err(invalid());
		}

		let tenths = value * 10.;

		if (tenths - tenths.round()).abs() > 1e-9 {
			return Err(invalid());
		}

		let tenths = tenths.round() as u16;

		Ok(Self { major: (tenths / 10) as u8, minor: (tenths % 10) as u8 })
	}
}
impl Default for ApiVersion {
	fn default() -> Self {
		Self::V8_0
	}
}
impl Display for ApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}.{}", self.major, self.minor)
	}
}
impl From<ApiVersion> for String {
	fn from(value: ApiVersion) -> Self {
		value.to_string()
	}
}
impl FromStr for ApiVersion {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ConfigError::InvalidVersion { version: s.to_owned() };
		let (major, minor) = s.split_once('.').unwrap_or((s, "0"));
		if minor.len() != 1 {
			return Err(invalid());
		}

		let major = major.parse::<u8>().map_err(|_| invalid())?;
		let minor = minor.parse::<u8>().map_err(|_| invalid())?;

		Ok(Self { major, minor })
	}
}
impl<'de> Deserialize<'de> for ApiVersion {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Number(f64),
			Text(String),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Number(value) => Self::from_number(value),
			Raw::Text(value) => value.parse(),
		}
		.map_err(serde::de::Error::custom)
	}
}

/// Options shared by IFB and DFA clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
	/// Deployment region (IFB host prefix).
	pub region: Region,
	/// IFB API version.
	pub version: ApiVersion,
	/// Forces QA hosts on or off; `None` derives the flag from the server identifier.
	pub is_qa: Option<bool>,
	/// Sleep and re-issue requests answered with HTTP 429.
	pub rate_limit_retry: bool,
	/// IFB only: request tokens from the server's own `oauth/token` endpoint.
	pub platform_credentials: bool,
	/// Timeout applied to token requests.
	pub token_timeout: Duration,
	/// Replaces the computed resource host.
	pub host: Option<Url>,
	/// Replaces the computed token endpoint.
	pub token_endpoint: Option<Url>,
}
impl ClientOptions {
	const DEFAULT_TOKEN_TIMEOUT: Duration = Duration::seconds(5);

	/// Overrides the region.
	pub fn with_region(mut self, region: Region) -> Self {
		self.region = region;

		self
	}

	/// Overrides the API version.
	pub fn with_version(mut self, version: ApiVersion) -> Self {
		self.version = version;

		self
	}

	/// Forces QA hosts on or off.
	pub fn with_qa(mut self, is_qa: bool) -> Self {
		self.is_qa = Some(is_qa);

		self
	}

	/// Enables or disables the 429 retry loop.
	pub fn with_rate_limit_retry(mut self, enabled: bool) -> Self {
		self.rate_limit_retry = enabled;

		self
	}

	/// Routes token requests to the IFB server's own token endpoint.
	pub fn with_platform_credentials(mut self, enabled: bool) -> Self {
		self.platform_credentials = enabled;

		self
	}

	/// Overrides the token request timeout.
	pub fn with_token_timeout(mut self, timeout: Duration) -> Self {
		self.token_timeout = if timeout.is_negative() { Duration::ZERO } else { timeout };

		self
	}

	/// Sends resource calls to `host` instead of the computed platform host.
	pub fn with_host(mut self, host: Url) -> Self {
		self.host = Some(host);

		self
	}

	/// Requests tokens from `endpoint` instead of the computed identity endpoint.
	pub fn with_token_endpoint(mut self, endpoint: Url) -> Self {
		self.token_endpoint = Some(endpoint);

		self
	}
}
impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			region: Region::default(),
			version: ApiVersion::default(),
			is_qa: None,
			rate_limit_retry: false,
			platform_credentials: false,
			token_timeout: Self::DEFAULT_TOKEN_TIMEOUT,
			host: None,
			token_endpoint: None,
		}
	}
}

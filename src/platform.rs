//! Platform descriptors: host resolution, token endpoints, and capability tables.
//!
//! Each platform declares its resources once through `def_resources!`, which emits both the
//! static capability table and the typed per-resource methods on the platform client.

/// Declares a capability table and the matching typed methods on a platform client.
macro_rules! def_resources {
	(
		$(#[$table_meta:meta])*
		$vis:vis const $table:ident for $client:ident;
		$(
			$(#[$meta:meta])*
			$name:literal => fn $fn_name:ident($($arg:ident),*) [$($verb:ident),+] $template:literal;
		)+
	) => {
		$(#[$table_meta])*
		$vis const $table: &[$crate::resource::CapabilityEntry] = &[
			$(
				$crate::resource::CapabilityEntry::from_static(
					$name,
					$crate::resource::MethodSet::EMPTY$(.with($crate::resource::Method::$verb))+,
					$template,
				),
			)+
		];

		impl<T> $client<T>
		where
			T: $crate::http::HttpTransport,
		{
			$(
				$(#[$meta])*
				pub fn $fn_name(
					&self,
					method: &str,
					$($arg: impl ::std::fmt::Display,)*
					request: $crate::resource::ResourceRequest,
				) -> $crate::error::Result<$crate::response::ApiResponse> {
					let path_args: &[String] = &[$($arg.to_string()),*];

					self.0.call_resource($name, method, path_args, request)
				}
			)+
		}
	};
}

pub mod dfa;
pub mod ifb;

pub use dfa::Dfa;
pub use ifb::Ifb;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::ClientOptions,
	error::ConfigError,
	resource::CapabilityTable,
};

/// Shared identity service token endpoint.
pub const IDENTITY_TOKEN_ENDPOINT: &str = "https://identity.zerionsoftware.com/oauth2/token";
/// QA identity service token endpoint.
pub const QA_IDENTITY_TOKEN_ENDPOINT: &str = "https://qa-identity.zerionsoftware.com/oauth2/token";

/// Remote platform served by a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformKind {
	/// iFormBuilder form management API.
	Ifb,
	/// Dataflow Automation API.
	Dfa,
}
impl PlatformKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			PlatformKind::Ifb => "ifb",
			PlatformKind::Dfa => "dfa",
		}
	}

	/// Returns `true` if `server` names one of the platform's QA servers.
	pub fn is_qa_server(self, server: &str) -> bool {
		let named = match self {
			PlatformKind::Ifb => "loadapp",
			PlatformKind::Dfa => "qatest",
		};

		server == named || server.starts_with("support")
	}

	/// Resolves QA mode; an explicit option wins over the server pattern.
	pub fn is_qa(self, credentials: &Credentials, options: &ClientOptions) -> bool {
		options.is_qa.unwrap_or_else(|| self.is_qa_server(credentials.server()))
	}

	/// Resource host without a trailing slash.
	pub fn resolve_host(self, credentials: &Credentials, options: &ClientOptions) -> String {
		if let Some(host) = &options.host {
			return host.as_str().trim_end_matches('/').to_owned();
		}

		let qa = self.is_qa(credentials, options);

		match self {
			PlatformKind::Ifb => {
				let prefix = if qa {
					"qa-api".to_owned()
				} else if options.region.is_default() {
					"api".to_owned()
				} else {
					format!("{}-api", options.region)
				};

				format!(
					"https://{prefix}.iformbuilder.com/exzact/api/{}/{}",
					options.version.path_segment(),
					credentials.server()
				)
			},
			PlatformKind::Dfa => format!(
				"https://{}dataflownode.zerionsoftware.com/zcrypt/v1.0",
				if qa { "qa-" } else { "" }
			),
		}
	}

	/// Token endpoint used as both request target and assertion audience.
	pub fn token_endpoint(
		self,
		credentials: &Credentials,
		options: &ClientOptions,
	) -> Result<Url, ConfigError> {
		if let Some(endpoint) = &options.token_endpoint {
			return Ok(endpoint.clone());
		}

		let raw = match self {
			PlatformKind::Ifb if options.platform_credentials =>
				format!("{}/oauth/token", self.resolve_host(credentials, options)),
			_ if self.is_qa(credentials, options) => QA_IDENTITY_TOKEN_ENDPOINT.to_owned(),
			_ => IDENTITY_TOKEN_ENDPOINT.to_owned(),
		};

		Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })
	}

	/// Capability table for the platform.
	pub fn capabilities(self) -> CapabilityTable {
		match self {
			PlatformKind::Ifb => CapabilityTable::from_static(ifb::IFB_RESOURCES),
			PlatformKind::Dfa => CapabilityTable::from_static(dfa::DFA_RESOURCES),
		}
	}
}
impl Display for PlatformKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

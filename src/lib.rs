//! Blocking client for the iFormBuilder (IFB) and Dataflow Automation (DFA) REST APIs.
//!
//! Both platforms share one request core: JWT-bearer token acquisition with lazy renewal,
//! verb validation against a declarative capability table, rate-limit aware execution, and a
//! uniform [`ApiResponse`](response::ApiResponse) envelope. The typed [`Ifb`](platform::Ifb) and
//! [`Dfa`](platform::Dfa) clients are thin views over [`ApiClient`](client::ApiClient).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod ext;
pub mod http;
pub mod obs;
pub mod platform;
pub mod resource;
pub mod response;

pub use client::{ApiClient, ClientBuilder};
pub use config::ClientOptions;
pub use error::{Error, Result};
pub use platform::{Dfa, Ifb, PlatformKind};
pub use resource::ResourceRequest;
pub use response::ApiResponse;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	sync::Arc,
};
// crates.io
use parking_lot::Mutex;
use time::{OffsetDateTime, macros};
// self
use zerion_api::{
	ApiClient,
	auth::Credentials,
	clock::ManualClock,
	config::ClientOptions,
	http::{HttpRequest, HttpResponse, HttpTransport},
	platform::{Dfa, Ifb, PlatformKind},
};

pub const EPOCH: OffsetDateTime = macros::datetime!(2025-01-01 00:00 UTC);

#[derive(Debug)]
pub struct ScriptExhausted(pub String);
impl Display for ScriptExhausted {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "No scripted response left for {}.", self.0)
	}
}
impl StdError for ScriptExhausted {}

/// Fake transport that answers token and resource calls from separate queues.
#[derive(Default)]
pub struct ScriptedTransport {
	tokens: Mutex<VecDeque<HttpResponse>>,
	calls: Mutex<VecDeque<HttpResponse>>,
	sent: Mutex<Vec<HttpRequest>>,
}
impl ScriptedTransport {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn push_token(&self, response: HttpResponse) -> &Self {
		self.tokens.lock().push_back(response);

		self
	}

	pub fn push_token_ok(&self, access_token: &str) -> &Self {
		self.push_token(
			HttpResponse::new(200)
				.with_header("Content-Type", "application/json")
				.with_body(format!(r#"{{"access_token":"{access_token}","token_type":"Bearer"}}"#)),
		)
	}

	pub fn push_call(&self, response: HttpResponse) -> &Self {
		self.calls.lock().push_back(response);

		self
	}

	pub fn sent(&self) -> Vec<HttpRequest> {
		self.sent.lock().clone()
	}

	pub fn token_requests(&self) -> Vec<HttpRequest> {
		self.sent().into_iter().filter(|request| is_token_url(&request.url)).collect()
	}

	pub fn resource_requests(&self) -> Vec<HttpRequest> {
		self.sent().into_iter().filter(|request| !is_token_url(&request.url)).collect()
	}
}
impl HttpTransport for ScriptedTransport {
	type TransportError = ScriptExhausted;

	fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::TransportError> {
		let queue = if is_token_url(&request.url) { &self.tokens } else { &self.calls };
		let url = request.url.clone();

		self.sent.lock().push(request);

		queue.lock().pop_front().ok_or(ScriptExhausted(url))
	}
}

fn is_token_url(url: &str) -> bool {
	url.ends_with("/oauth2/token") || url.ends_with("/oauth/token")
}

pub fn credentials() -> Credentials {
	Credentials::new("acme", "client-key", "client-secret")
}

pub fn build_client(
	platform: PlatformKind,
	transport: &Arc<ScriptedTransport>,
	clock: &ManualClock,
	options: ClientOptions,
) -> ApiClient<ScriptedTransport> {
	ApiClient::builder(credentials(), transport.clone())
		.with_clock(clock.clone())
		.with_options(options)
		.build(platform)
		.expect("Scripted client should build.")
}

pub fn build_ifb(
	transport: &Arc<ScriptedTransport>,
	options: ClientOptions,
) -> Ifb<ScriptedTransport> {
	ApiClient::builder(credentials(), transport.clone())
		.with_clock(ManualClock::new(EPOCH))
		.with_options(options)
		.build_ifb()
		.expect("Scripted IFB client should build.")
}

pub fn build_dfa(
	transport: &Arc<ScriptedTransport>,
	options: ClientOptions,
) -> Dfa<ScriptedTransport> {
	ApiClient::builder(credentials(), transport.clone())
		.with_clock(ManualClock::new(EPOCH))
		.with_options(options)
		.build_dfa()
		.expect("Scripted DFA client should build.")
}

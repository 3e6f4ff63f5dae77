//! Shared request core behind the IFB and DFA clients.
//!
//! [`ApiClient`] owns one transport, one token manager, and the platform's capability table.
//! Every call runs the same pipeline: lazy token renewal, verb validation, URI expansion,
//! and a send loop that optionally waits out HTTP 429 responses.

mod metrics;

pub use self::metrics::*;

// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret, TokenManager},
	clock::{Clock, SystemClock},
	config::ClientOptions,
	error::TransportError,
	ext::{FixedDelay, RateLimitContext, RateLimitDecision, RateLimitPolicy, parse_retry_after},
	http::{HttpRequest, HttpTransport},
	obs::{self, ApiSpan, CallOutcome, TokenOutcome},
	platform::{Dfa, Ifb, PlatformKind},
	resource::{CapabilityTable, Method, ResourceDescription, ResourceRequest, uri},
	response::ApiResponse,
};

const RATE_LIMITED: u16 = 429;

/// Authenticated client for one platform and one set of credentials.
///
/// Construct it through [`ApiClient::builder`], or through [`Ifb::new`] and [`Dfa::new`] for
/// the default reqwest transport. Calls take `&self`; token state and counters live behind
/// locks, but calls are not coordinated with each other.
pub struct ApiClient<T>
where
	T: HttpTransport,
{
	platform: PlatformKind,
	options: ClientOptions,
	host: String,
	capabilities: CapabilityTable,
	transport: Arc<T>,
	clock: Arc<dyn Clock>,
	rate_limit: Arc<dyn RateLimitPolicy>,
	tokens: TokenManager,
	metrics: CallMetrics,
	span: ApiSpan,
}
impl<T> ApiClient<T>
where
	T: HttpTransport,
{
	/// Starts a builder for `credentials` sending traffic through `transport`.
	pub fn builder(credentials: Credentials, transport: impl Into<Arc<T>>) -> ClientBuilder<T> {
		ClientBuilder::new(credentials, transport)
	}

	/// Platform served by this client.
	pub fn platform(&self) -> PlatformKind {
		self.platform
	}

	/// Resource host without a trailing slash.
	pub fn host(&self) -> &str {
		&self.host
	}

	/// Client identity.
	pub fn credentials(&self) -> &Credentials {
		self.tokens.credentials()
	}

	/// Options the client was built with.
	pub fn options(&self) -> &ClientOptions {
		&self.options
	}

	/// Platform capability table.
	pub fn capabilities(&self) -> &CapabilityTable {
		&self.capabilities
	}

	/// Current access token, if one was acquired.
	pub fn access_token(&self) -> Option<Secret> {
		self.tokens.state().access_token
	}

	/// Instant after which the current token is renewed.
	pub fn access_token_expires_at(&self) -> Option<OffsetDateTime> {
		self.tokens.state().expires_at
	}

	/// Number of resource attempts made, retries included.
	pub fn api_calls(&self) -> u64 {
		self.metrics.calls()
	}

	/// Round-trip time of the most recent attempt.
	pub fn last_elapsed(&self) -> Option<Duration> {
		self.metrics.last_elapsed()
	}

	/// Instant of the most recent successful token acquisition.
	pub fn session_started_at(&self) -> Option<OffsetDateTime> {
		self.metrics.session_started_at()
	}

	/// Time since [`ApiClient::session_started_at`].
	pub fn session_lifetime(&self) -> Option<Duration> {
		self.session_started_at().map(|started| self.clock.now() - started)
	}

	/// Describes every declared resource.
	pub fn describe_resources(&self) -> BTreeMap<&str, ResourceDescription> {
		self.capabilities.resources().map(|name| (name, self.capabilities.describe(name))).collect()
	}

	/// Describes one resource; unknown names yield [`ResourceDescription::NotDefined`].
	pub fn describe_resource(&self, resource: &str) -> ResourceDescription {
		self.capabilities.describe(resource)
	}

	/// Requests a new token and stores it on success.
	///
	/// Failures are logged and leave the previous token in place.
	pub fn acquire_token(&self) -> bool {
		let _guard = self.span.enter();
		let now = self.clock.now();

		match self.tokens.acquire(&*self.transport, now) {
			Ok(_) => {
				self.metrics.record_session_start(now);
				obs::record_token_outcome(self.platform, TokenOutcome::Success);

				true
			},
			Err(e) => {
				obs::log_token_failure(self.tokens.endpoint().as_str(), &e);
				obs::record_token_outcome(self.platform, TokenOutcome::Failure);

				false
			},
		}
	}

	/// Renews the token when one exists and has expired.
	pub fn ensure_fresh_token(&self) {
		if self.tokens.needs_refresh(self.clock.now()) {
			self.acquire_token();
		}
	}

	/// Validates `method` for `resource`, expands the URI, and executes the call.
	pub fn call_resource<S>(
		&self,
		resource: &str,
		method: &str,
		path_args: &[S],
		request: ResourceRequest,
	) -> Result<ApiResponse>
	where
		S: AsRef<str>,
	{
		let entry = self.capabilities.entry(resource)?;

		entry.check_method(method)?;

		let url = uri::build_uri(
			&self.host,
			&entry.template,
			path_args,
			request.instance_id.as_deref(),
			&request.params,
		)?;

		self.execute(method, &url, request.body.as_ref())
	}

	/// Sends one logical call to an absolute `url`.
	///
	/// Only GET, POST, PUT, and DELETE are accepted. POST and PUT send `body` as JSON
	/// (`null` when absent). Any HTTP status is returned as an [`ApiResponse`]; only
	/// transport failures become errors.
	pub fn execute(&self, method: &str, url: &str, body: Option<&Value>) -> Result<ApiResponse> {
		let _guard = self.span.enter();

		self.ensure_fresh_token();

		let method = method.parse::<Method>()?;

		if !method.is_executable() {
			return Err(Error::InvalidMethod { method: method.as_str().to_owned() });
		}

		let payload =
			method.has_body().then(|| body.unwrap_or(&Value::Null).to_string().into_bytes());
		let mut attempt = 0_u32;

		loop {
			attempt += 1;

			let mut request = HttpRequest::new(method, url)
				.with_header("Content-Type", "application/json");

			if let Some(authorization) = self.tokens.state().authorization() {
				request = request.with_header("Authorization", authorization);
			}
			if let Some(payload) = &payload {
				request = request.with_body(payload.clone());
			}

			let started = Instant::now();
			let response =
				self.transport.send(request).map_err(|e| TransportError::network(url, e))?;
			let elapsed = Duration::try_from(started.elapsed()).unwrap_or(Duration::MAX);

			self.metrics.record_call(elapsed);
			obs::log_attempt(method.as_str(), url, response.status, elapsed);
			obs::record_call_outcome(self.platform, CallOutcome::from_status(response.status));

			if response.status == RATE_LIMITED && self.options.rate_limit_retry {
				let now = self.clock.now();
				let retry_after =
					response.headers.get("retry-after").and_then(|raw| parse_retry_after(raw, now));
				let context = RateLimitContext::new(url, attempt)
					.with_retry_after(retry_after)
					.with_observed_at(now);

				if let RateLimitDecision::Delay(directive) = self.rate_limit.evaluate(&context) {
					let wait = directive.wait_from(self.clock.now());

					obs::log_rate_limited(url, attempt, wait, directive.reason.as_deref());
					self.clock.sleep(wait);

					continue;
				}
			}

			return Ok(ApiResponse::from_http(response));
		}
	}
}
impl<T> Debug for ApiClient<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("platform", &self.platform)
			.field("host", &self.host)
			.field("options", &self.options)
			.field("tokens", &self.tokens)
			.field("metrics", &self.metrics)
			.finish()
	}
}

/// Assembles an [`ApiClient`] with optional clock and rate-limit overrides.
pub struct ClientBuilder<T>
where
	T: HttpTransport,
{
	credentials: Credentials,
	transport: Arc<T>,
	options: ClientOptions,
	clock: Arc<dyn Clock>,
	rate_limit: Arc<dyn RateLimitPolicy>,
}
impl<T> ClientBuilder<T>
where
	T: HttpTransport,
{
	/// Creates a builder with default options, the system clock, and [`FixedDelay`].
	pub fn new(credentials: Credentials, transport: impl Into<Arc<T>>) -> Self {
		Self {
			credentials,
			transport: transport.into(),
			options: ClientOptions::default(),
			clock: Arc::new(SystemClock),
			rate_limit: Arc::new(FixedDelay::default()),
		}
	}

	/// Replaces the client options.
	pub fn with_options(mut self, options: ClientOptions) -> Self {
		self.options = options;

		self
	}

	/// Replaces the time source used for token expiry and rate-limit waits.
	pub fn with_clock(mut self, clock: impl 'static + Clock) -> Self {
		self.clock = Arc::new(clock);

		self
	}

	/// Replaces the policy consulted on HTTP 429 when retries are enabled.
	pub fn with_rate_limit_policy(mut self, policy: impl 'static + RateLimitPolicy) -> Self {
		self.rate_limit = Arc::new(policy);

		self
	}

	/// Builds the client and performs the initial token acquisition.
	///
	/// Only configuration problems fail; a failed token acquisition is logged and the client
	/// is returned without a token.
	pub fn build(self, platform: PlatformKind) -> Result<ApiClient<T>> {
		let Self { credentials, transport, options, clock, rate_limit } = self;
		let host = platform.resolve_host(&credentials, &options);
		let endpoint = platform.token_endpoint(&credentials, &options)?;
		let span = ApiSpan::new(platform, credentials.server());
		let tokens = TokenManager::new(credentials, endpoint, options.token_timeout);
		let client = ApiClient {
			platform,
			options,
			host,
			capabilities: platform.capabilities(),
			transport,
			clock,
			rate_limit,
			tokens,
			metrics: CallMetrics::default(),
			span,
		};

		client.acquire_token();

		Ok(client)
	}

	/// Builds an IFB client.
	pub fn build_ifb(self) -> Result<Ifb<T>> {
		self.build(PlatformKind::Ifb).map(Ifb)
	}

	/// Builds a DFA client.
	pub fn build_dfa(self) -> Result<Dfa<T>> {
		self.build(PlatformKind::Dfa).map(Dfa)
	}
}
impl<T> Debug for ClientBuilder<T>
where
	T: HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientBuilder")
			.field("credentials", &self.credentials)
			.field("options", &self.options)
			.finish()
	}
}

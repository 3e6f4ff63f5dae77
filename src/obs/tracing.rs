// self
use crate::{_prelude::*, platform::PlatformKind};

/// Span attached to one client; every call runs inside it.
#[derive(Clone, Debug)]
pub struct ApiSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ApiSpan {
	/// Creates a span tagged with the platform and credential server.
	pub fn new(platform: PlatformKind, server: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("zerion_api.client", platform = platform.as_str(), server);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (platform, server);

			Self {}
		}
	}

	/// Enters the span until the returned guard drops.
	pub fn enter(&self) -> ApiSpanGuard<'_> {
		#[cfg(feature = "tracing")]
		{
			ApiSpanGuard { guard: self.span.enter() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			ApiSpanGuard { _span: std::marker::PhantomData }
		}
	}
}

/// RAII guard returned by [`ApiSpan::enter`].
pub struct ApiSpanGuard<'a> {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::Entered<'a>,
	#[cfg(not(feature = "tracing"))]
	_span: std::marker::PhantomData<&'a ApiSpan>,
}
impl Debug for ApiSpanGuard<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ApiSpanGuard(..)")
	}
}

/// Emits a warning for a failed token exchange.
pub fn log_token_failure(endpoint: &str, error: &dyn StdError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(endpoint, error = %error, "Token acquisition failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, error);
	}
}

/// Emits an event before sleeping on a 429 response.
pub fn log_rate_limited(url: &str, attempt: u32, backoff: Duration, reason: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(
			url,
			attempt,
			backoff_secs = backoff.whole_seconds(),
			reason,
			"Rate limited; waiting."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (url, attempt, backoff, reason);
	}
}

/// Emits a debug event for each completed attempt.
pub fn log_attempt(method: &str, url: &str, status: u16, elapsed: Duration) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			method,
			url,
			status,
			elapsed_ms = elapsed.whole_milliseconds() as u64,
			"Resource call completed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (method, url, status, elapsed);
	}
}

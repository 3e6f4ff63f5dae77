//! Rate limit policy contracts consulted when a resource call is answered with HTTP 429.

// crates.io
use time::format_description::well_known::Rfc2822;
// self
use crate::_prelude::*;

/// Strategy deciding whether, and how long, to wait before re-issuing a rate-limited call.
///
/// The executor only consults the policy when the client was built with
/// [`ClientOptions::rate_limit_retry`](crate::config::ClientOptions::rate_limit_retry).
pub trait RateLimitPolicy
where
	Self: Send + Sync,
{
	/// Evaluates a 429 response.
	fn evaluate(&self, context: &RateLimitContext) -> RateLimitDecision;
}

/// Context shared with a [`RateLimitPolicy`] after a 429 response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitContext {
	/// URL of the rate-limited call.
	pub url: String,
	/// 1-based number of the attempt that was rejected.
	pub attempt: u32,
	/// Wait hint parsed from the `Retry-After` header, if present.
	pub retry_after: Option<Duration>,
	/// Instant the response was observed.
	pub observed_at: OffsetDateTime,
}
impl RateLimitContext {
	/// Creates a new context for the given URL and attempt number.
	pub fn new(url: impl Into<String>, attempt: u32) -> Self {
		Self {
			url: url.into(),
			attempt,
			retry_after: None,
			observed_at: OffsetDateTime::now_utc(),
		}
	}

	/// Attaches a `Retry-After` hint.
	pub fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
		self.retry_after = retry_after;

		self
	}

	/// Overrides the timestamp associated with the observation.
	pub fn with_observed_at(mut self, instant: OffsetDateTime) -> Self {
		self.observed_at = instant;

		self
	}
}

/// Result emitted by a [`RateLimitPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RateLimitDecision {
	/// Wait, then re-issue the call.
	Delay(RetryDirective),
	/// Return the 429 response to the caller.
	GiveUp,
}

/// Tells the executor when to re-issue a rate-limited call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryDirective {
	/// Instant at which the call is re-issued; instants in the past retry immediately.
	pub retry_at: OffsetDateTime,
	/// Optional note attached to the rate-limit log event.
	pub reason: Option<String>,
}
impl RetryDirective {
	/// Retries at `retry_at`.
	pub fn at(retry_at: OffsetDateTime) -> Self {
		Self { retry_at, reason: None }
	}

	/// Adds a human-readable reason.
	pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());

		self
	}

	/// Time left until [`retry_at`](Self::retry_at) as seen from `now`, never negative.
	pub fn wait_from(&self, now: OffsetDateTime) -> Duration {
		(self.retry_at - now).max(Duration::ZERO)
	}
}

/// Waits a fixed delay after every 429, optionally bounded by an attempt cap.
///
/// The default waits 60 seconds with no cap, which suits batch jobs that prefer to sit out a
/// quota window over failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay {
	/// Wait between attempts.
	pub delay: Duration,
	/// Maximum number of attempts (including the first); `None` retries forever.
	pub max_attempts: Option<u32>,
	/// Prefer the server's `Retry-After` hint over `delay` when one is present.
	pub honor_retry_after: bool,
}
impl FixedDelay {
	/// Default wait between attempts.
	pub const DEFAULT_DELAY: Duration = Duration::seconds(60);

	/// Creates an unbounded policy waiting `delay` between attempts.
	pub fn new(delay: Duration) -> Self {
		Self {
			delay: if delay.is_negative() { Duration::ZERO } else { delay },
			max_attempts: None,
			honor_retry_after: false,
		}
	}

	/// Caps the number of attempts.
	pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
		self.max_attempts = Some(max_attempts);

		self
	}

	/// Uses the `Retry-After` hint when present.
	pub fn honoring_retry_after(mut self) -> Self {
		self.honor_retry_after = true;

		self
	}
}
impl Default for FixedDelay {
	fn default() -> Self {
		Self::new(Self::DEFAULT_DELAY)
	}
}
impl RateLimitPolicy for FixedDelay {
	fn evaluate(&self, context: &RateLimitContext) -> RateLimitDecision {
		if self.max_attempts.is_some_and(|max| context.attempt >= max) {
			return RateLimitDecision::GiveUp;
		}

		let backoff = match context.retry_after {
			Some(hint) if self.honor_retry_after => hint,
			_ => self.delay,
		};

		RateLimitDecision::Delay(
			RetryDirective::at(context.observed_at + backoff)
				.with_reason(format!("Rate limited on attempt {}.", context.attempt)),
		)
	}
}

/// Parses a `Retry-After` header value (delta seconds or an HTTP date) relative to `now`.
pub fn parse_retry_after(raw: &str, now: OffsetDateTime) -> Option<Duration> {
	let raw = raw.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - now;

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

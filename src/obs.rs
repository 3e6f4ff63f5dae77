//! Optional observability helpers for the request core.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to open a `zerion_api.client` span per client (fields `platform` and
//!   `server`) and emit events for token failures, rate limiting, and each attempt.
//! - Enable `metrics` to increment `zerion_api_call_total` (labels `platform`, `outcome`) for
//!   every resource response and `zerion_api_token_total` for every token exchange.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for resource calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// 2xx response.
	Success,
	/// 429 response.
	RateLimited,
	/// Any other non-2xx response.
	Failure,
}
impl CallOutcome {
	/// Classifies an HTTP status code.
	pub const fn from_status(status: u16) -> Self {
		match status {
			200..=299 => CallOutcome::Success,
			429 => CallOutcome::RateLimited,
			_ => CallOutcome::Failure,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Success => "success",
			CallOutcome::RateLimited => "rate_limited",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for token exchanges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenOutcome {
	/// A token was stored.
	Success,
	/// The exchange failed; the previous token state was kept.
	Failure,
}
impl TokenOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenOutcome::Success => "success",
			TokenOutcome::Failure => "failure",
		}
	}
}
impl Display for TokenOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn statuses_map_to_outcomes() {
		assert_eq!(CallOutcome::from_status(204), CallOutcome::Success);
		assert_eq!(CallOutcome::from_status(429), CallOutcome::RateLimited);
		assert_eq!(CallOutcome::from_status(404).to_string(), "failure");
		assert_eq!(TokenOutcome::Failure.as_str(), "failure");
	}
}

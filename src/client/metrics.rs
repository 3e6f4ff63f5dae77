// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::_prelude::*;

/// Per-client call counters.
///
/// Updated after every physical attempt, retries included, and never reset.
#[derive(Debug, Default)]
pub struct CallMetrics {
	calls: AtomicU64,
	last_elapsed: Mutex<Option<Duration>>,
	session_started_at: Mutex<Option<OffsetDateTime>>,
}
impl CallMetrics {
	/// Number of HTTP attempts made against resource endpoints.
	pub fn calls(&self) -> u64 {
		self.calls.load(Ordering::Relaxed)
	}

	/// Round-trip time of the most recent attempt.
	pub fn last_elapsed(&self) -> Option<Duration> {
		*self.last_elapsed.lock()
	}

	/// Instant of the most recent successful token acquisition.
	pub fn session_started_at(&self) -> Option<OffsetDateTime> {
		*self.session_started_at.lock()
	}

	pub(crate) fn record_call(&self, elapsed: Duration) {
		self.calls.fetch_add(1, Ordering::Relaxed);

		*self.last_elapsed.lock() = Some(elapsed);
	}

	pub(crate) fn record_session_start(&self, instant: OffsetDateTime) {
		*self.session_started_at.lock() = Some(instant);
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn counters_accumulate() {
		let metrics = CallMetrics::default();

		assert_eq!(metrics.calls(), 0);
		assert_eq!(metrics.last_elapsed(), None);

		metrics.record_call(Duration::milliseconds(30));
		metrics.record_call(Duration::milliseconds(12));
		metrics.record_session_start(macros::datetime!(2025-01-01 00:00 UTC));

		assert_eq!(metrics.calls(), 2);
		assert_eq!(metrics.last_elapsed(), Some(Duration::milliseconds(12)));
		assert_eq!(metrics.session_started_at(), Some(macros::datetime!(2025-01-01 00:00 UTC)));
	}
}

//! Time source used for token expiry checks and rate-limit waits.

// self
use crate::_prelude::*;

/// Wall clock abstraction so token lifetimes and back-off waits can be driven in tests.
pub trait Clock
where
	Self: Send + Sync,
{
	/// Returns the current UTC instant.
	fn now(&self) -> OffsetDateTime;

	/// Blocks the calling thread for `duration`.
	///
	/// Negative durations return immediately.
	fn sleep(&self, duration: Duration) {
		if let Ok(std_duration) = std::time::Duration::try_from(duration) {
			std::thread::sleep(std_duration);
		}
	}
}

/// Clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;
impl Clock for SystemClock {
	fn now(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc()
	}
}

/// Manually driven clock; [`Clock::sleep`] advances the instant instead of blocking.
#[derive(Clone, Debug)]
pub struct ManualClock(Arc<Mutex<OffsetDateTime>>);
impl ManualClock {
	/// Starts the clock at `instant`.
	pub fn new(instant: OffsetDateTime) -> Self {
		Self(Arc::new(Mutex::new(instant)))
	}

	/// Moves the clock forward by `delta`.
	pub fn advance(&self, delta: Duration) {
		*self.0.lock() += delta;
	}

	/// Jumps the clock to `instant`.
	pub fn set(&self, instant: OffsetDateTime) {
		*self.0.lock() = instant;
	}
}
impl Clock for ManualClock {
	fn now(&self) -> OffsetDateTime {
		*self.0.lock()
	}

	fn sleep(&self, duration: Duration) {
		if duration.is_positive() {
			self.advance(duration);
		}
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn manual_clock_sleep_advances_instead_of_blocking() {
		let clock = ManualClock::new(macros::datetime!(2025-01-01 00:00 UTC));

		clock.sleep(Duration::seconds(60));

		assert_eq!(clock.now(), macros::datetime!(2025-01-01 00:01 UTC));

		clock.sleep(Duration::seconds(-5));

		assert_eq!(clock.now(), macros::datetime!(2025-01-01 00:01 UTC));
	}

	#[test]
	fn manual_clock_can_jump_backwards() {
		let clock = ManualClock::new(macros::datetime!(2025-01-01 00:00 UTC));

		clock.set(macros::datetime!(2024-12-31 23:00 UTC));

		assert_eq!(clock.now(), macros::datetime!(2024-12-31 23:00 UTC));
	}

	#[test]
	fn system_clock_tolerates_negative_sleep() {
		SystemClock.sleep(Duration::seconds(-1));
	}
}

//! Cancel-and-reschedule timer used to coalesce bursts of input.

use std::time::{Duration, Instant};

/// Fires once, `delay` after the most recent [`schedule`](Self::schedule).
///
/// Every schedule supersedes the previous one; polling before the deadline or
/// after the debouncer has fired returns `false`.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	deadline: Option<Instant>,
}

impl Debouncer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			deadline: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Cancel any pending run and schedule a new one relative to `now`.
	pub fn schedule(&mut self, now: Instant) {
		self.deadline = Some(now + self.delay);
	}

	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Returns `true` exactly once when the latest schedule has come due.
	pub fn poll(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

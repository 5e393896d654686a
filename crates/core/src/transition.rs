use std::time::{Duration, Instant};

use crate::constraint::HeightConstraint;

/// Length of the animated expand/collapse.
pub const EXPAND_DURATION: Duration = Duration::from_millis(70);

/// In-flight animation of the host height constraint and results opacity.
#[derive(Debug, Clone)]
pub(crate) struct Transition {
	pub(crate) constraint: HeightConstraint,
	started: Instant,
	duration: Duration,
	from_height: f64,
	pub(crate) to_height: f64,
	from_opacity: f64,
	pub(crate) to_opacity: f64,
}

/// Interpolated values for one step of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Frame {
	pub(crate) height: f64,
	pub(crate) opacity: f64,
	pub(crate) finished: bool,
}

impl Transition {
	pub(crate) fn new(
		constraint: HeightConstraint,
		started: Instant,
		(from_height, to_height): (f64, f64),
		(from_opacity, to_opacity): (f64, f64),
	) -> Self {
		Self {
			constraint,
			started,
			duration: EXPAND_DURATION,
			from_height,
			to_height,
			from_opacity,
			to_opacity,
		}
	}

	pub(crate) fn sample(&self, now: Instant) -> Frame {
		let elapsed = now.saturating_duration_since(self.started);
		if elapsed >= self.duration {
			return Frame {
				height: self.to_height,
				opacity: self.to_opacity,
				finished: true,
			};
		}

		let progress = ease_in_out(elapsed.as_secs_f64() / self.duration.as_secs_f64());
		Frame {
			height: lerp(self.from_height, self.to_height, progress),
			opacity: lerp(self.from_opacity, self.to_opacity, progress),
			finished: false,
		}
	}
}

fn ease_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	t * t * (3.0 - 2.0 * t)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
	from + (to - from) * t
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn samples_progress_then_land_on_targets() {
		let start = Instant::now();
		let transition = Transition::new(
			HeightConstraint::new("height", 50.0),
			start,
			(50.0, 400.0),
			(0.0, 1.0),
		);

		let midway = transition.sample(start + EXPAND_DURATION / 2);
		assert!(!midway.finished);
		assert!(midway.height > 50.0 && midway.height < 400.0);
		assert!(midway.opacity > 0.0 && midway.opacity < 1.0);

		let done = transition.sample(start + EXPAND_DURATION);
		assert!(done.finished);
		assert_eq!(done.height, 400.0);
		assert_eq!(done.opacity, 1.0);
	}
}

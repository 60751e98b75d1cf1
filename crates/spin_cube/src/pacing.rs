// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	thread,
	time::{Duration, Instant},
};

/// Fixed-interval frame scheduler.
///
/// Frames are paced against a running deadline rather than a bare sleep
/// after each frame, so time spent drawing does not stretch the interval.
/// A frame that overruns by more than one whole interval restarts the
/// schedule from the current time instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
	interval: Duration,
	next_deadline: Option<Instant>,
}

impl FramePacer {
	pub fn new(interval: Duration) -> Self {
		Self {
			interval,
			next_deadline: None,
		}
	}

	/// A pacer that never waits.
	pub fn unpaced() -> Self {
		Self::new(Duration::ZERO)
	}

	pub fn interval(&self) -> Duration {
		self.interval
	}

	/// Work out how long to wait at `now` before the next frame may
	/// start, and move the deadline forward by one interval.
	pub fn schedule(&mut self, now: Instant) -> Duration {
		if self.interval.is_zero() {
			return Duration::ZERO
		}

		let deadline = self.next_deadline.unwrap_or(now + self.interval);
		let (wait, deadline) = if deadline >= now {
			(deadline - now, deadline)
		} else if now - deadline > self.interval {
			log::trace!("frame overran by {:?}, restarting schedule", now - deadline);
			(Duration::ZERO, now)
		} else {
			(Duration::ZERO, deadline)
		};

		self.next_deadline = Some(deadline + self.interval);
		wait
	}

	/// Block until the current frame's slot is over.
	pub fn frame_finished(&mut self) {
		let wait = self.schedule(Instant::now());
		if !wait.is_zero() {
			thread::sleep(wait);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn ms(millis: u64) -> Duration {
		Duration::from_millis(millis)
	}

	#[test]
	fn first_frame_waits_full_interval() {
		let mut pacer = FramePacer::new(ms(50));
		let t0 = Instant::now();
		assert_eq!(pacer.schedule(t0), ms(50));
	}

	#[test]
	fn draw_time_is_absorbed() {
		let mut pacer = FramePacer::new(ms(50));
		let t0 = Instant::now();
		pacer.schedule(t0);
		// frame took 10ms after waking at the 50ms deadline
		assert_eq!(pacer.schedule(t0 + ms(60)), ms(40));
		assert_eq!(pacer.schedule(t0 + ms(100)), ms(50));
	}

	#[test]
	fn small_overrun_keeps_schedule() {
		let mut pacer = FramePacer::new(ms(50));
		let t0 = Instant::now();
		pacer.schedule(t0);
		pacer.schedule(t0 + ms(50));
		// deadline was 150ms
		assert_eq!(pacer.schedule(t0 + ms(170)), Duration::ZERO);
		assert_eq!(pacer.schedule(t0 + ms(180)), ms(20));
	}

	#[test]
	fn large_overrun_restarts_schedule() {
		let mut pacer = FramePacer::new(ms(50));
		let t0 = Instant::now();
		pacer.schedule(t0);
		assert_eq!(pacer.schedule(t0 + ms(400)), Duration::ZERO);
		assert_eq!(pacer.schedule(t0 + ms(410)), ms(40));
	}

	#[test]
	fn unpaced_never_waits() {
		let mut pacer = FramePacer::unpaced();
		let t0 = Instant::now();
		assert_eq!(pacer.schedule(t0), Duration::ZERO);
		assert_eq!(pacer.schedule(t0 + ms(1)), Duration::ZERO);
	}

	#[test]
	fn frame_finished_sleeps() {
		let mut pacer = FramePacer::new(ms(10));
		let start = Instant::now();
		pacer.frame_finished();
		assert!(start.elapsed() >= ms(10));
	}
}

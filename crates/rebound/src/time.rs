//! Frame timing and delta time.
//!
//! [`Time`] is advanced once per frame by the main loop. The delta is the
//! raw wall-clock time since the previous frame; there is no fixed-step
//! accumulator.

use std::time::{Duration, Instant};

/// Frame timing state.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    /// When the loop started.
    startup: Instant,
    /// When the current frame started.
    frame_start: Instant,
    /// Time between the previous frame start and this one.
    delta: Duration,
    /// Total time since startup.
    elapsed: Duration,
    /// Frame counter.
    frame_count: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub(crate) fn starting_at(now: Instant) -> Self {
        Self {
            startup: now,
            frame_start: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each frame to update timing.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub(crate) fn update_at(&mut self, now: Instant) {
        self.delta = now.saturating_duration_since(self.frame_start);
        self.frame_start = now;
        self.elapsed = now.saturating_duration_since(self.startup);
        self.frame_count += 1;
    }

    /// Duration of the previous frame.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta time in seconds, what update systems consume.
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total elapsed time since startup.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

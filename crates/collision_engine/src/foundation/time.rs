//! Time management utilities

use std::time::{Duration, Instant};

/// Wall-clock frame timer
///
/// Feeds real elapsed time into a [`FixedTimestep`](crate::simulation::FixedTimestep)
/// when the host runs in real time.
pub struct Timer {
    last_frame: Instant,
    delta: Duration,
    total: Duration,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            total: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Mark a frame boundary and return the time since the previous one
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame);
        self.total += self.delta;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta
    }

    /// Time between the last two ticks, in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total time accumulated by all ticks, in seconds
    pub fn total_time(&self) -> f32 {
        self.total.as_secs_f32()
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self { start_time: None }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start, or restart, the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.tick();
        timer.tick();

        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= timer.delta_time());
    }

    #[test]
    fn test_stopwatch_runs_from_start() {
        let idle = Stopwatch::new();
        assert_eq!(idle.elapsed(), Duration::ZERO);

        let running = Stopwatch::start_new();
        let first = running.elapsed();
        assert!(running.elapsed() >= first);
    }
}

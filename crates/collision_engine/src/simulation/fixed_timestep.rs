//! Fixed-timestep accumulator
//!
//! Banks wall-clock time and pays it out in constant-size steps, so the
//! simulation rate does not depend on how fast frames are produced. Time is
//! kept in `f64` so long runs pay out the exact number of steps.

/// Default step length, in seconds
pub const DEFAULT_STEP: f64 = 1.0 / 60.0;

/// Default cap on steps drained per frame
pub const DEFAULT_MAX_STEPS: u32 = 8;

/// Accumulator for a fixed-step simulation loop
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
    max_steps_per_frame: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, DEFAULT_MAX_STEPS)
    }
}

impl FixedTimestep {
    /// Create an accumulator with the given step length and per-frame cap
    ///
    /// A cap of zero means no cap.
    pub fn new(step: f64, max_steps_per_frame: u32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps_per_frame,
        }
    }

    /// Step length, in seconds
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Time banked but not yet drained
    pub fn accumulated(&self) -> f64 {
        self.accumulator
    }

    /// Bank `delta_time` seconds of elapsed time
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn accumulate(&mut self, delta_time: f64) {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.accumulator += delta_time;
        }
    }

    /// Consume whole steps from the bank and return how many are due
    ///
    /// When more than `max_steps_per_frame` steps are owed, the extra time is
    /// discarded so a slow frame cannot snowball into ever longer ones.
    pub fn drain(&mut self) -> u32 {
        if self.step <= 0.0 {
            return 0;
        }

        let mut steps = 0;
        while self.accumulator >= self.step {
            if self.max_steps_per_frame != 0 && steps == self.max_steps_per_frame {
                log::warn!(
                    "FixedTimestep: dropping {:.4}s of simulation time after {} steps",
                    self.accumulator,
                    steps
                );
                self.accumulator %= self.step;
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the bank, in `[0, 1)`
    pub fn alpha(&self) -> f64 {
        if self.step > 0.0 {
            self.accumulator / self.step
        } else {
            0.0
        }
    }

    /// Empty the bank
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

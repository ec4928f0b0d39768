//! Timing curves
//!
//! A [`TimingCurve`] tells an animation runtime how to move toward a target:
//! how long one linear pass takes, how long to wait before each pass,
//! whether it repeats and whether repeats alternate direction.
//!
//! Marquees use exactly two curves: [`TimingCurve::instant`] for the
//! starting pose and a linear, forever-repeating curve for the scroll loop.

use marquee_core::{StepTiming, INSTANT_SECONDS};

/// Shortest pass the runtime will compute with, in milliseconds
const MIN_DURATION_MS: f64 = 1e-3;

/// Repetition mode of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repeat {
    /// Play one pass and hold the end value
    #[default]
    Once,
    /// Play passes forever
    Forever {
        /// Alternate direction on every other pass (ping-pong)
        autoreverse: bool,
    },
}

/// Where a curve is at a given elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Progress from the segment start (0.0) to its target (1.0)
    pub progress: f32,
    /// Zero-based pass number
    pub iteration: u64,
    /// Whether the elapsed time falls inside a pass's delay
    pub delayed: bool,
    /// Whether a non-repeating curve has completed
    pub finished: bool,
}

/// Timing of one linear animated transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    /// Length of one pass in milliseconds
    pub duration_ms: f64,
    /// Wait before each pass in milliseconds
    pub delay_ms: f64,
    /// Repetition mode
    pub repeat: Repeat,
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::instant()
    }
}

impl TimingCurve {
    /// Linear, single pass
    pub fn linear(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            repeat: Repeat::Once,
        }
    }

    /// The near-zero transition used to set a pose without visible motion
    pub fn instant() -> Self {
        Self::linear(INSTANT_SECONDS * 1000.0)
    }

    /// Wait before every pass
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Repeat forever, optionally alternating direction
    pub fn repeat_forever(mut self, autoreverse: bool) -> Self {
        self.repeat = Repeat::Forever { autoreverse };
        self
    }

    /// Whether this is the instant pose curve
    pub fn is_instant(&self) -> bool {
        self.repeat == Repeat::Once
            && self.delay_ms <= 0.0
            && self.duration_ms <= INSTANT_SECONDS * 1000.0
    }

    /// Whether passes repeat forever
    pub fn repeats(&self) -> bool {
        matches!(self.repeat, Repeat::Forever { .. })
    }

    /// Sample the curve `elapsed_ms` after it started
    pub fn sample(&self, elapsed_ms: f64) -> CurveSample {
        let elapsed = elapsed_ms.max(0.0);
        let duration = self.duration_ms.max(MIN_DURATION_MS);
        let delay = self.delay_ms.max(0.0);

        match self.repeat {
            Repeat::Once => {
                if elapsed < delay {
                    return CurveSample {
                        progress: 0.0,
                        iteration: 0,
                        delayed: true,
                        finished: false,
                    };
                }
                let fraction = (elapsed - delay) / duration;
                CurveSample {
                    progress: fraction.min(1.0) as f32,
                    iteration: 0,
                    delayed: false,
                    finished: fraction >= 1.0,
                }
            }
            Repeat::Forever { autoreverse } => {
                let period = delay + duration;
                let iteration = (elapsed / period).floor();
                let local = elapsed - iteration * period;
                let iteration = iteration as u64;

                let delayed = local < delay;
                let fraction = if delayed {
                    0.0
                } else {
                    ((local - delay) / duration).min(1.0)
                };
                let progress = if autoreverse && iteration % 2 == 1 {
                    1.0 - fraction as f32
                } else {
                    fraction as f32
                };

                CurveSample {
                    progress,
                    iteration,
                    delayed,
                    finished: false,
                }
            }
        }
    }
}

impl From<StepTiming> for TimingCurve {
    fn from(timing: StepTiming) -> Self {
        match timing {
            StepTiming::Instant => TimingCurve::instant(),
            StepTiming::Loop {
                duration,
                delay,
                autoreverse,
            } => TimingCurve::linear(duration * 1000.0)
                .with_delay(delay * 1000.0)
                .repeat_forever(autoreverse),
        }
    }
}

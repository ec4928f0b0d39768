//! Marquee scroll state machine
//!
//! Decides which phase a marquee is in and which horizontal offset each
//! phase asks for. The machine never interpolates: a reset yields one or two
//! [`PhaseStep`]s, each pairing a phase with the timing the animation
//! runtime should use to reach that phase's offset.
//!
//! A started cycle is always two steps in order: `Ready` with
//! [`StepTiming::Instant`] to establish the starting pose without visible
//! interpolation, then `Animating` with [`StepTiming::Loop`]. Both come out
//! of the same reset so the runtime can treat them as one visual unit.

use smallvec::{smallvec, SmallVec};

use crate::config::{Boundary, IdleAlignment, MarqueeConfig, MarqueeDirection};
use crate::geometry::Dimensions;
use crate::phase::{marquee_events, MarqueePhase, StateTransitions};

/// Length of the "instant" transition in seconds
///
/// Short enough to be imperceptible, long enough that the change still
/// registers as an animated transition with the runtime.
pub const INSTANT_SECONDS: f64 = 0.01;

/// How the runtime should move to a step's offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepTiming {
    /// Apply effectively at once ([`INSTANT_SECONDS`], linear, no repeat)
    Instant,
    /// Linear, delayed, infinitely repeating cycle
    Loop {
        /// Seconds per cycle
        duration: f64,
        /// Seconds to wait before each cycle
        delay: f64,
        /// Reverse on alternate cycles instead of snapping back
        autoreverse: bool,
    },
}

impl StepTiming {
    /// Seconds for one pass of this timing
    pub fn duration_seconds(&self) -> f64 {
        match self {
            StepTiming::Instant => INSTANT_SECONDS,
            StepTiming::Loop { duration, .. } => *duration,
        }
    }

    /// Returns true for the instant pose timing
    pub fn is_instant(&self) -> bool {
        matches!(self, StepTiming::Instant)
    }
}

/// One requested phase change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStep {
    /// Phase to enter
    pub phase: MarqueePhase,
    /// How to move to the phase's offset
    pub timing: StepTiming,
}

/// Result of a reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResetOutcome {
    /// Inputs matched the previous reset; nothing to request
    Unchanged,
    /// Scrolling is off; rest at the idle alignment
    Stopped(PhaseStep),
    /// A fresh cycle: instant `Ready` pose followed by the `Animating` loop
    Started {
        /// Instant jump to the starting boundary
        ready: PhaseStep,
        /// Continuous loop toward the ending boundary
        animating: PhaseStep,
    },
}

impl ResetOutcome {
    /// The requested steps, in the order they must be applied
    pub fn steps(&self) -> SmallVec<[PhaseStep; 2]> {
        match *self {
            ResetOutcome::Unchanged => SmallVec::new(),
            ResetOutcome::Stopped(step) => smallvec![step],
            ResetOutcome::Started { ready, animating } => smallvec![ready, animating],
        }
    }

    /// Whether the reset was suppressed
    pub fn is_unchanged(&self) -> bool {
        matches!(self, ResetOutcome::Unchanged)
    }
}

/// What a reset would request, compared to suppress redundant resets
///
/// Only inputs that move the content horizontally take part. Heights never
/// do, and the idle alignment only matters while stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResetKey {
    Stopped {
        idle: f32,
    },
    Started {
        ready: f32,
        end: f32,
        duration: f64,
        delay: f64,
        autoreverse: bool,
    },
}

impl ResetKey {
    fn new(config: &MarqueeConfig, dimensions: &Dimensions) -> Self {
        let duration = config
            .effective_duration()
            .filter(|_| !(config.stop_if_fits && dimensions.content_fits()));

        match duration {
            None => ResetKey::Stopped {
                idle: offset(MarqueePhase::Idle, dimensions, config),
            },
            Some(duration) => ResetKey::Started {
                ready: offset(MarqueePhase::Ready, dimensions, config),
                end: offset(MarqueePhase::Animating, dimensions, config),
                duration,
                delay: config.effective_delay(),
                autoreverse: config.autoreverse,
            },
        }
    }
}

/// Offset a phase asks for
///
/// `Idle` follows the idle alignment, `Ready` is the starting boundary and
/// `Animating` the ending boundary of the configured direction. Left-to-right
/// does not read the boundary: it starts fully off the left edge and ends at
/// the viewport width.
pub fn offset(phase: MarqueePhase, dimensions: &Dimensions, config: &MarqueeConfig) -> f32 {
    let viewport = dimensions.viewport_width();
    let content = dimensions.content_width();

    match phase {
        MarqueePhase::Idle => match config.idle_alignment {
            IdleAlignment::Leading => 0.0,
            IdleAlignment::Center => 0.5 * (viewport - content),
            IdleAlignment::Trailing => viewport - content,
        },
        MarqueePhase::Ready => match (config.direction, config.boundary) {
            (MarqueeDirection::RightToLeft, Boundary::Outer) => viewport,
            (MarqueeDirection::RightToLeft, Boundary::Inner) => 0.0,
            (MarqueeDirection::LeftToRight, _) => -content,
        },
        MarqueePhase::Animating => match (config.direction, config.boundary) {
            (MarqueeDirection::RightToLeft, Boundary::Outer) => -content,
            (MarqueeDirection::RightToLeft, Boundary::Inner) => viewport - content,
            (MarqueeDirection::LeftToRight, _) => viewport,
        },
    }
}

/// Phase state owned by a single marquee
#[derive(Debug, Clone, Default)]
pub struct MarqueeStateMachine {
    phase: MarqueePhase,
    last_reset: Option<ResetKey>,
}

impl MarqueeStateMachine {
    /// Create a machine in `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> MarqueePhase {
        self.phase
    }

    /// Offset of the current phase
    pub fn offset(&self, dimensions: &Dimensions, config: &MarqueeConfig) -> f32 {
        offset(self.phase, dimensions, config)
    }

    /// Forget the previous reset so the next one always produces steps
    pub fn invalidate(&mut self) {
        self.last_reset = None;
    }

    /// Recompute the phase from the current config and measurements
    ///
    /// Returns [`ResetOutcome::Unchanged`] when the resulting steps would
    /// equal the ones from the previous reset, so repeated calls and changes
    /// that do not move the content horizontally never restart a running
    /// cycle.
    pub fn reset(&mut self, config: &MarqueeConfig, dimensions: &Dimensions) -> ResetOutcome {
        let key = ResetKey::new(config, dimensions);
        if self.last_reset == Some(key) {
            tracing::trace!("Marquee reset suppressed, inputs unchanged");
            return ResetOutcome::Unchanged;
        }
        self.last_reset = Some(key);

        match key {
            ResetKey::Stopped { .. } => {
                if config.is_animation_enabled() {
                    tracing::debug!(
                        "Content fits viewport ({} < {}), stopping",
                        dimensions.content_width(),
                        dimensions.viewport_width()
                    );
                } else {
                    tracing::debug!(
                        "Marquee animation disabled (duration {}), stopping",
                        config.duration
                    );
                }
                self.stop()
            }
            ResetKey::Started {
                duration,
                delay,
                autoreverse,
                ..
            } => self.start(duration, delay, autoreverse),
        }
    }

    fn stop(&mut self) -> ResetOutcome {
        self.send(marquee_events::STOP);
        ResetOutcome::Stopped(PhaseStep {
            phase: MarqueePhase::Idle,
            timing: StepTiming::Instant,
        })
    }

    fn start(&mut self, duration: f64, delay: f64, autoreverse: bool) -> ResetOutcome {
        self.send(marquee_events::PREPARE);
        let ready = PhaseStep {
            phase: self.phase,
            timing: StepTiming::Instant,
        };

        self.send(marquee_events::START);
        let animating = PhaseStep {
            phase: self.phase,
            timing: StepTiming::Loop {
                duration,
                delay,
                autoreverse,
            },
        };

        tracing::debug!(
            "Marquee cycle started: {}s, delay {}s, autoreverse {}",
            duration,
            delay,
            autoreverse
        );
        ResetOutcome::Started { ready, animating }
    }

    fn send(&mut self, event: u32) {
        if let Some(next) = self.phase.on_event(event) {
            tracing::trace!("Marquee phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}

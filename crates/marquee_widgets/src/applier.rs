//! Offset requests
//!
//! The applier resolves the state machine's [`PhaseStep`]s into concrete
//! [`OffsetRequest`]s: where the content should be translated to and on
//! which [`TimingCurve`]. Executing the request is left to an
//! [`AnimationRuntime`], the seam to the host's animation system.

use marquee_animation::{TimingCurve, Translation};
use marquee_core::{offset, Dimensions, MarqueeConfig, MarqueePhase, PhaseStep};
use smallvec::SmallVec;

/// "Translate the content to this position with this timing"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRequest {
    /// Phase the request belongs to
    pub phase: MarqueePhase,
    /// Target translation of the content
    pub translation: Translation,
    /// How to get there
    pub curve: TimingCurve,
}

impl OffsetRequest {
    /// Horizontal target in pixels
    pub fn x(&self) -> f32 {
        self.translation.x
    }

    /// Whether this is the instant starting pose (or an instant stop)
    pub fn is_instant(&self) -> bool {
        self.curve.is_instant()
    }
}

/// Requests emitted by a single lifecycle event
pub type OffsetRequests = SmallVec<[OffsetRequest; 2]>;

/// Resolves phase steps against the current measurements and config
#[derive(Debug, Clone, Copy)]
pub struct OffsetApplier<'a> {
    dimensions: &'a Dimensions,
    config: &'a MarqueeConfig,
}

impl<'a> OffsetApplier<'a> {
    /// Create an applier for one reset
    pub fn new(dimensions: &'a Dimensions, config: &'a MarqueeConfig) -> Self {
        Self { dimensions, config }
    }

    /// Translation for a phase, centered vertically when heights are known
    pub fn translation(&self, phase: MarqueePhase) -> Translation {
        Translation::new(
            offset(phase, self.dimensions, self.config),
            self.dimensions.centered_y(),
        )
    }

    /// Resolve one step
    pub fn resolve(&self, step: &PhaseStep) -> OffsetRequest {
        OffsetRequest {
            phase: step.phase,
            translation: self.translation(step.phase),
            curve: TimingCurve::from(step.timing),
        }
    }

    /// Resolve steps in order
    pub fn resolve_all<'s>(&self, steps: impl IntoIterator<Item = &'s PhaseStep>) -> OffsetRequests {
        steps.into_iter().map(|step| self.resolve(step)).collect()
    }
}

/// Trait implemented by whatever interpolates content positions
///
/// Requests produced by one lifecycle event must be applied in order and
/// without rendering in between, so an instant pose and the loop that
/// follows it land in the same frame.
pub trait AnimationRuntime {
    /// Retarget the content toward `request`, superseding any running animation
    fn animate(&mut self, request: &OffsetRequest);

    /// Apply a batch of requests in order
    fn apply(&mut self, requests: &[OffsetRequest]) {
        for request in requests {
            self.animate(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Boundary, StepTiming};

    #[test]
    fn test_resolve_ready_step() {
        let dims = Dimensions::new(200.0, 80.0);
        let config = MarqueeConfig::new();
        let applier = OffsetApplier::new(&dims, &config);

        let request = applier.resolve(&PhaseStep {
            phase: MarqueePhase::Ready,
            timing: StepTiming::Instant,
        });
        assert_eq!(request.x(), 200.0);
        assert_eq!(request.translation.y, 0.0);
        assert!(request.is_instant());
    }

    #[test]
    fn test_resolve_loop_step() {
        let dims = Dimensions::new(200.0, 80.0);
        let config = MarqueeConfig::new().boundary(Boundary::Inner);
        let applier = OffsetApplier::new(&dims, &config);

        let request = applier.resolve(&PhaseStep {
            phase: MarqueePhase::Animating,
            timing: StepTiming::Loop {
                duration: 2.0,
                delay: 0.0,
                autoreverse: false,
            },
        });
        assert_eq!(request.x(), 120.0);
        assert!(request.curve.repeats());
        assert_eq!(request.curve.duration_ms, 2000.0);
    }

    #[test]
    fn test_vertical_centering() {
        let dims = Dimensions::new(200.0, 80.0).with_heights(30.0, 20.0);
        let config = MarqueeConfig::new();
        let translation = OffsetApplier::new(&dims, &config).translation(MarqueePhase::Idle);

        assert_eq!(translation.x, 0.0);
        assert!((translation.y - 5.0).abs() < 1e-4);
    }
}

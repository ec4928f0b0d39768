//! Tween-backed animation runtime
//!
//! For hosts without their own animation engine: feed it the marquee's
//! requests, call [`TweenRuntime::tick`] once per frame and read the
//! translation to position the content.

use marquee_animation::{OffsetTween, Translation};
use marquee_core::MarqueePhase;

use crate::applier::{AnimationRuntime, OffsetRequest};

/// Drives one marquee's content translation on a fixed tick
#[derive(Debug, Clone, Default)]
pub struct TweenRuntime {
    tween: OffsetTween,
    phase: MarqueePhase,
    applied: u64,
}

impl TweenRuntime {
    /// Create a runtime with the content at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt_ms` milliseconds
    ///
    /// Returns true while anything is still moving.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let running = self.tween.tick(dt_ms);
        tracing::trace!(
            "Marquee tick: x = {:.2} ({:?})",
            self.tween.value().x,
            self.phase
        );
        running
    }

    /// Translation to render the content at
    pub fn translation(&self) -> Translation {
        self.tween.value()
    }

    /// Phase of the most recent request
    pub fn phase(&self) -> MarqueePhase {
        self.phase
    }

    /// Whether an animation is running
    pub fn is_animating(&self) -> bool {
        self.tween.is_animating()
    }

    /// Number of requests applied so far
    pub fn applied_requests(&self) -> u64 {
        self.applied
    }

    /// The underlying tween
    pub fn tween(&self) -> &OffsetTween {
        &self.tween
    }
}

impl AnimationRuntime for TweenRuntime {
    fn animate(&mut self, request: &OffsetRequest) {
        self.tween.retarget(request.translation, request.curve);
        self.phase = request.phase;
        self.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_animation::TimingCurve;

    fn request(phase: MarqueePhase, x: f32, curve: TimingCurve) -> OffsetRequest {
        OffsetRequest {
            phase,
            translation: Translation::new(x, 0.0),
            curve,
        }
    }

    #[test]
    fn test_start_batch_runs_from_ready_pose() {
        let mut runtime = TweenRuntime::new();
        runtime.apply(&[
            request(MarqueePhase::Ready, 200.0, TimingCurve::instant()),
            request(
                MarqueePhase::Animating,
                -80.0,
                TimingCurve::linear(2000.0).repeat_forever(false),
            ),
        ]);

        assert_eq!(runtime.phase(), MarqueePhase::Animating);
        assert_eq!(runtime.applied_requests(), 2);
        assert_eq!(runtime.translation().x, 200.0);

        runtime.tick(500.0);
        assert!((runtime.translation().x - 130.0).abs() < 1e-3);
        assert!(runtime.is_animating());
    }

    #[test]
    fn test_stop_settles() {
        let mut runtime = TweenRuntime::new();
        runtime.animate(&request(MarqueePhase::Idle, 60.0, TimingCurve::instant()));

        assert!(!runtime.tick(16.0));
        assert_eq!(runtime.translation().x, 60.0);
        assert!(!runtime.is_animating());
    }
}

//! Fixed-tick tween runtime
//!
//! [`Tween`] moves a value toward a target along a [`TimingCurve`], advanced
//! by explicit `tick` calls. It is the reference implementation of the
//! marquee timing contract for hosts that have no animation engine of their
//! own, and it is what the tests drive.
//!
//! Retargeting always starts from the value currently presented, except
//! when the running segment is an instant pose: then the new segment starts
//! from the pose's target. This is what makes an instant `Ready` pose
//! followed by the `Animating` loop behave as one unit.

use crate::timing::TimingCurve;
use crate::values::{Interpolate, Translation};

/// A retargetable tween for any interpolatable value
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    /// Segment start value
    from: T,
    /// Segment target value
    to: T,
    /// Timing of the current segment
    curve: TimingCurve,
    /// Milliseconds since the segment started
    elapsed_ms: f64,
    /// Value shown at the current time
    presented: T,
    /// Whether the segment is still running
    active: bool,
}

/// Tween over content translations
pub type OffsetTween = Tween<Translation>;

impl<T: Interpolate> Tween<T> {
    /// Create a tween resting at `initial`
    pub fn new(initial: T) -> Self {
        Self {
            from: initial.clone(),
            to: initial.clone(),
            curve: TimingCurve::instant(),
            elapsed_ms: 0.0,
            presented: initial,
            active: false,
        }
    }

    /// Value shown at the current time
    pub fn value(&self) -> T {
        self.presented.clone()
    }

    /// Target of the current segment
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Start value of the current segment
    pub fn origin(&self) -> &T {
        &self.from
    }

    /// Timing of the current segment
    pub fn curve(&self) -> &TimingCurve {
        &self.curve
    }

    /// Whether a segment is running
    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Start a new segment toward `target`, superseding the running one
    pub fn retarget(&mut self, target: T, curve: TimingCurve) {
        let from_pose = self.active && self.curve.is_instant();
        let start = if from_pose {
            self.to.clone()
        } else {
            self.presented.clone()
        };
        tracing::trace!(
            "Tween retargeted: {:.1}ms, delay {:.1}ms, {:?} (from pose: {})",
            curve.duration_ms,
            curve.delay_ms,
            curve.repeat,
            from_pose
        );

        self.from = start;
        self.to = target;
        self.curve = curve;
        self.elapsed_ms = 0.0;
        self.active = true;
        self.update_presented();
    }

    /// Advance by `dt_ms` milliseconds
    ///
    /// Returns true while the segment keeps running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_ms += f64::from(dt_ms.max(0.0));
        self.update_presented();
        self.active
    }

    fn update_presented(&mut self) {
        let sample = self.curve.sample(self.elapsed_ms);
        if sample.finished {
            self.presented = self.to.clone();
            self.active = false;
        } else {
            self.presented = self.from.lerp(&self.to, sample.progress);
        }
    }
}

impl<T: Interpolate + Default> Default for Tween<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

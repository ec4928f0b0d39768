//! Marquee Animation
//!
//! Timing curves and a fixed-tick tween runtime for marquee offsets.
//!
//! # Features
//!
//! - **Timing Curves**: instant pose and delayed, repeating, optionally
//!   reversing linear loops, built from the core's `StepTiming`
//! - **Tweens**: retargetable interpolation driven by explicit ticks
//! - **Interpolate**: trait for values the tween can move

pub mod timing;
pub mod tween;
pub mod values;

pub use timing::{CurveSample, Repeat, TimingCurve};
pub use tween::{OffsetTween, Tween};
pub use values::{Interpolate, Translation};

//! Marquee Widget
//!
//! A container that scrolls its content horizontally when it may overflow,
//! built on the `marquee_core` state machine.
//!
//! # Architecture
//!
//! 1. **Width Observer**: filters the host's layout measurements down to
//!    real content width changes.
//!
//! 2. **Lifecycle Glue**: [`Marquee`] turns appear/disappear, measurement
//!    and config callbacks into state machine resets.
//!
//! 3. **Offset Applier**: resolves each reset's phase steps into
//!    [`OffsetRequest`]s (target translation + timing curve) and hands them
//!    to an [`AnimationRuntime`]. [`TweenRuntime`] is a fixed-tick runtime
//!    for hosts that have none.
//!
//! # Example
//!
//! ```rust
//! use marquee_core::MarqueeConfig;
//! use marquee_widgets::prelude::*;
//!
//! let mut marquee = Marquee::new();
//! let mut runtime = TweenRuntime::new();
//!
//! // Layout pass measured the viewport and the content
//! marquee.viewport_resized(200.0, 24.0);
//! marquee.content_measured(80.0);
//!
//! // On screen: Ready pose, then the loop
//! runtime.apply(&marquee.appear(MarqueeConfig::new().duration(2.0)));
//! assert_eq!(runtime.translation().x, 200.0);
//!
//! // Each frame
//! runtime.tick(1000.0);
//! assert!((runtime.translation().x - 60.0).abs() < 1e-3);
//! ```

pub mod applier;
pub mod marquee;
pub mod measure;
pub mod observer;
pub mod runtime;

pub use applier::{AnimationRuntime, OffsetApplier, OffsetRequest, OffsetRequests};
pub use marquee::Marquee;
pub use measure::{
    EstimatedTextMeasurer, TextLayoutOptions, TextMeasurer, TextMetrics, MONOSPACE_ADVANCE,
};
pub use observer::WidthObserver;
pub use runtime::TweenRuntime;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::applier::{AnimationRuntime, OffsetRequest};
    pub use crate::marquee::Marquee;
    pub use crate::measure::{EstimatedTextMeasurer, TextMeasurer};
    pub use crate::runtime::TweenRuntime;
}

//! Marquee Core
//!
//! The logic behind a horizontally scrolling "ticker-tape" widget:
//!
//! - **Configuration**: duration, delay, direction and the other marquee
//!   parameters, with scoped inheritance through [`ConfigScope`]
//! - **Dimensions**: viewport and content measurements from the host layout
//! - **State Machine**: `Idle` / `Ready` / `Animating` phases, the reset
//!   transition and the offset each phase asks for
//!
//! Nothing here renders or interpolates. A reset produces [`PhaseStep`]s;
//! turning them into motion is the job of the host's animation runtime.
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{offset, Dimensions, MarqueeConfig, MarqueePhase, MarqueeStateMachine};
//!
//! let mut machine = MarqueeStateMachine::new();
//! let config = MarqueeConfig::new().duration(4.0);
//! let dims = Dimensions::new(200.0, 80.0);
//!
//! let steps = machine.reset(&config, &dims).steps();
//! assert_eq!(steps[0].phase, MarqueePhase::Ready);
//! assert_eq!(steps[1].phase, MarqueePhase::Animating);
//! assert_eq!(offset(MarqueePhase::Animating, &dims, &config), -80.0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod machine;
pub mod phase;
pub mod scope;

pub use config::{Boundary, IdleAlignment, MarqueeConfig, MarqueeDirection, DEFAULT_DURATION};
pub use error::{ConfigError, Result};
pub use geometry::{sanitize_length, Dimensions};
pub use machine::{
    offset, MarqueeStateMachine, PhaseStep, ResetOutcome, StepTiming, INSTANT_SECONDS,
};
pub use phase::{marquee_events, MarqueePhase, StateTransitions};
pub use scope::{ConfigOverrides, ConfigScope};

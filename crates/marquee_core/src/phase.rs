//! Scroll phases and their transitions
//!
//! ```text
//!            PREPARE            START
//!   Idle ─────────────▶ Ready ─────────▶ Animating
//!    ▲                    │ ▲                │
//!    └────── STOP ────────┘ └─── PREPARE ────┘
//! ```
//!
//! `Ready` is an instantaneous pose: a reset always follows `PREPARE` with
//! `START` in the same call.

use std::hash::Hash;

/// Trait for phase enums driven by numeric events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Events understood by [`MarqueePhase`]
pub mod marquee_events {
    /// Stop scrolling and rest at the idle alignment
    pub const STOP: u32 = 20000;
    /// Jump to the starting boundary
    pub const PREPARE: u32 = 20001;
    /// Begin the continuous loop toward the ending boundary
    pub const START: u32 = 20002;
}

/// Current phase of a marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarqueePhase {
    /// Not scrolling, content rests at the idle alignment
    #[default]
    Idle,
    /// Posed at the starting boundary, about to animate
    Ready,
    /// Looping toward the ending boundary
    Animating,
}

impl MarqueePhase {
    /// Returns true while the content is scrolling
    pub fn is_animating(&self) -> bool {
        matches!(self, MarqueePhase::Animating)
    }

    /// Returns true while the content is at rest
    pub fn is_idle(&self) -> bool {
        matches!(self, MarqueePhase::Idle)
    }
}

impl StateTransitions for MarqueePhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use marquee_events::*;

        match (self, event) {
            (MarqueePhase::Idle, STOP) => None,
            (_, STOP) => Some(MarqueePhase::Idle),

            // A running loop is restarted from the starting pose
            (MarqueePhase::Ready, PREPARE) => None,
            (_, PREPARE) => Some(MarqueePhase::Ready),

            (MarqueePhase::Ready, START) => Some(MarqueePhase::Animating),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::marquee_events::*;
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(MarqueePhase::default(), MarqueePhase::Idle);
        assert!(MarqueePhase::default().is_idle());
    }

    #[test]
    fn test_start_cycle() {
        let ready = MarqueePhase::Idle.on_event(PREPARE).unwrap();
        assert_eq!(ready, MarqueePhase::Ready);
        let animating = ready.on_event(START).unwrap();
        assert!(animating.is_animating());
    }

    #[test]
    fn test_restart_from_animating() {
        assert_eq!(
            MarqueePhase::Animating.on_event(PREPARE),
            Some(MarqueePhase::Ready)
        );
    }

    #[test]
    fn test_start_requires_ready() {
        assert_eq!(MarqueePhase::Idle.on_event(START), None);
        assert_eq!(MarqueePhase::Animating.on_event(START), None);
    }

    #[test]
    fn test_stop() {
        assert_eq!(MarqueePhase::Idle.on_event(STOP), None);
        assert_eq!(MarqueePhase::Ready.on_event(STOP), Some(MarqueePhase::Idle));
        assert_eq!(
            MarqueePhase::Animating.on_event(STOP),
            Some(MarqueePhase::Idle)
        );
    }

    #[test]
    fn test_unknown_event() {
        assert_eq!(MarqueePhase::Ready.on_event(42), None);
    }
}

//! Marquee widget
//!
//! Wires host lifecycle callbacks to the scroll state machine:
//!
//! - **appear** forces a fresh reset with the latest config and measurements
//! - **content / viewport measurements** and **config changes** reset when
//!   they move the content horizontally; a height change only re-centers a
//!   resting marquee and is picked up by a running one on its next restart
//! - **disappear** stops producing requests but keeps phase and measurements
//! - **unmount** is terminal; every entry point becomes a no-op
//!
//! Every entry point returns the [`OffsetRequests`] to hand to the host's
//! [`AnimationRuntime`](crate::applier::AnimationRuntime), in order. An empty
//! list means nothing visible changed.
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{ConfigOverrides, ConfigScope};
//! use marquee_widgets::{AnimationRuntime, Marquee, TweenRuntime};
//!
//! let scope = ConfigScope::root().nest(&ConfigOverrides::new().duration(4.0));
//! let mut marquee = Marquee::new();
//! let mut runtime = TweenRuntime::new();
//!
//! runtime.apply(&marquee.render(&scope, 200.0, 24.0));
//! runtime.apply(&marquee.appear(scope.config()));
//! runtime.apply(&marquee.content_measured(480.0));
//!
//! runtime.tick(16.0);
//! assert!(marquee.phase().is_animating());
//! ```

use marquee_core::{
    ConfigScope, Dimensions, MarqueeConfig, MarqueePhase, MarqueeStateMachine, PhaseStep,
    StepTiming,
};

use crate::applier::{OffsetApplier, OffsetRequest, OffsetRequests};
use crate::observer::WidthObserver;

/// A horizontally scrolling container for one piece of content
#[derive(Debug, Clone)]
pub struct Marquee {
    machine: MarqueeStateMachine,
    dimensions: Dimensions,
    observer: WidthObserver,
    config: MarqueeConfig,
    /// Vertical offset of the last emitted request
    posed_y: f32,
    visible: bool,
    mounted: bool,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new()
    }
}

impl Marquee {
    /// Create a mounted, not yet visible marquee with default config
    pub fn new() -> Self {
        Self::with_config(MarqueeConfig::default())
    }

    /// Create a mounted, not yet visible marquee
    pub fn with_config(config: MarqueeConfig) -> Self {
        Self {
            machine: MarqueeStateMachine::new(),
            dimensions: Dimensions::default(),
            observer: WidthObserver::new(),
            config,
            posed_y: 0.0,
            visible: false,
            mounted: true,
        }
    }

    /// Current phase
    pub fn phase(&self) -> MarqueePhase {
        self.machine.phase()
    }

    /// Latest measurements
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Config used by the latest reset
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Whether the marquee is on screen
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the marquee is still mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Horizontal offset of the current phase
    pub fn offset(&self) -> f32 {
        self.machine.offset(&self.dimensions, &self.config)
    }

    /// Request describing the current phase, for hosts that re-render declaratively
    ///
    /// Returns `None` while hidden or unmounted.
    pub fn current_request(&self) -> Option<OffsetRequest> {
        if !self.is_active() {
            return None;
        }
        let timing = match self.phase() {
            MarqueePhase::Idle | MarqueePhase::Ready => StepTiming::Instant,
            MarqueePhase::Animating => StepTiming::Loop {
                duration: self.config.effective_duration()?,
                delay: self.config.effective_delay(),
                autoreverse: self.config.autoreverse,
            },
        };
        let applier = OffsetApplier::new(&self.dimensions, &self.config);
        Some(applier.resolve(&PhaseStep {
            phase: self.phase(),
            timing,
        }))
    }

    /// The viewport became visible
    pub fn appear(&mut self, config: MarqueeConfig) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        tracing::debug!("Marquee appeared");
        self.visible = true;
        self.config = config;
        self.machine.invalidate();
        self.reset()
    }

    /// The viewport left the screen
    pub fn disappear(&mut self) {
        if self.visible {
            tracing::debug!("Marquee disappeared in phase {:?}", self.phase());
        }
        self.visible = false;
    }

    /// The content's natural width was measured
    pub fn content_measured(&mut self, width: f32) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        match self.observer.report(width) {
            Some(width) => {
                self.dimensions.set_content_width(width);
                self.reset()
            }
            None => OffsetRequests::new(),
        }
    }

    /// The content's natural width and height were measured
    pub fn content_size_measured(&mut self, width: f32, height: f32) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        self.dimensions.set_content_height(height);
        if let Some(width) = self.observer.report(width) {
            self.dimensions.set_content_width(width);
        }
        self.reset()
    }

    /// The viewport was laid out at a new size
    pub fn viewport_resized(&mut self, width: f32, height: f32) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        self.dimensions.set_viewport_width(width);
        self.dimensions.set_viewport_height(height);
        self.reset()
    }

    /// The enclosing scope's config changed
    pub fn update_config(&mut self, config: MarqueeConfig) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        self.config = config;
        self.reset()
    }

    /// One render pass: read the config from `scope` and the viewport size
    pub fn render(
        &mut self,
        scope: &ConfigScope,
        viewport_width: f32,
        viewport_height: f32,
    ) -> OffsetRequests {
        if !self.mounted {
            return OffsetRequests::new();
        }
        self.config = scope.config();
        self.dimensions.set_viewport_width(viewport_width);
        self.dimensions.set_viewport_height(viewport_height);
        self.reset()
    }

    /// The widget was removed; no further transitions happen
    pub fn unmount(&mut self) {
        tracing::debug!("Marquee unmounted");
        self.visible = false;
        self.mounted = false;
    }

    fn is_active(&self) -> bool {
        self.mounted && self.visible
    }

    /// Reset against the latest inputs; hidden marquees only record them
    fn reset(&mut self) -> OffsetRequests {
        if !self.is_active() {
            return OffsetRequests::new();
        }
        let outcome = self.machine.reset(&self.config, &self.dimensions);
        let applier = OffsetApplier::new(&self.dimensions, &self.config);
        let mut requests = applier.resolve_all(outcome.steps().iter());

        // Re-center a resting marquee; a running loop keeps its pose
        let y = self.dimensions.centered_y();
        if requests.is_empty()
            && self.phase().is_idle()
            && (y - self.posed_y).abs() > f32::EPSILON
        {
            requests.push(applier.resolve(&PhaseStep {
                phase: MarqueePhase::Idle,
                timing: StepTiming::Instant,
            }));
        }

        if let Some(last) = requests.last() {
            self.posed_y = last.translation.y;
        }
        requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Boundary, IdleAlignment, MarqueeDirection};

    fn shown(config: MarqueeConfig) -> Marquee {
        let mut marquee = Marquee::new();
        marquee.viewport_resized(200.0, 20.0);
        marquee.content_measured(80.0);
        marquee.appear(config);
        marquee
    }

    #[test]
    fn test_starts_idle_and_hidden() {
        let marquee = Marquee::new();
        assert_eq!(marquee.phase(), MarqueePhase::Idle);
        assert!(!marquee.is_visible());
        assert_eq!(marquee.dimensions().content_width(), 0.0);
        assert!(marquee.current_request().is_none());
    }

    #[test]
    fn test_hidden_marquee_emits_nothing() {
        let mut marquee = Marquee::new();
        assert!(marquee.viewport_resized(200.0, 20.0).is_empty());
        assert!(marquee.content_measured(80.0).is_empty());
        assert_eq!(marquee.phase(), MarqueePhase::Idle);
        // Measurements are still recorded
        assert_eq!(marquee.dimensions().content_width(), 80.0);
    }

    #[test]
    fn test_appear_starts_cycle() {
        let mut marquee = Marquee::new();
        marquee.viewport_resized(200.0, 20.0);
        marquee.content_measured(80.0);

        let requests = marquee.appear(MarqueeConfig::new());
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].phase, MarqueePhase::Ready);
        assert!(requests[0].is_instant());
        assert_eq!(requests[0].x(), 200.0);
        assert_eq!(requests[1].phase, MarqueePhase::Animating);
        assert_eq!(requests[1].x(), -80.0);
    }

    #[test]
    fn test_reappear_restarts_even_with_same_inputs() {
        let mut marquee = shown(MarqueeConfig::new());
        marquee.disappear();
        assert!(marquee.phase().is_animating());

        let requests = marquee.appear(MarqueeConfig::new());
        assert_eq!(requests.len(), 2);
    }

    #[test]
    fn test_same_width_does_not_reset() {
        let mut marquee = shown(MarqueeConfig::new());
        assert!(marquee.content_measured(80.0).is_empty());
        assert_eq!(marquee.content_measured(95.0).len(), 2);
    }

    #[test]
    fn test_config_changes_reset() {
        let mut marquee = shown(MarqueeConfig::new());

        let requests = marquee.update_config(MarqueeConfig::new().duration(0.0));
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].phase, MarqueePhase::Idle);

        // Alignment alone also takes effect
        let requests = marquee.update_config(
            MarqueeConfig::new()
                .duration(0.0)
                .idle_alignment(IdleAlignment::Center),
        );
        assert_eq!(requests.len(), 1);
        assert!((requests[0].x() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_boundary_change_restarts_cycle() {
        let mut marquee = shown(MarqueeConfig::new());
        let requests = marquee.update_config(MarqueeConfig::new().boundary(Boundary::Inner));

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].x(), 0.0);
        assert_eq!(requests[1].x(), 120.0);
    }

    #[test]
    fn test_render_reads_scope() {
        let mut marquee = shown(MarqueeConfig::new());
        let scope = ConfigScope::root().nest(
            &marquee_core::ConfigOverrides::new().direction(MarqueeDirection::LeftToRight),
        );

        let requests = marquee.render(&scope, 200.0, 20.0);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].x(), -80.0);
        assert_eq!(requests[1].x(), 200.0);

        // Same scope and viewport next frame: nothing to do
        assert!(marquee.render(&scope, 200.0, 20.0).is_empty());
    }

    #[test]
    fn test_current_request() {
        let marquee = shown(MarqueeConfig::new().delay(1.0));
        let request = marquee.current_request().unwrap();
        assert_eq!(request.phase, MarqueePhase::Animating);
        assert_eq!(request.x(), -80.0);
        assert_eq!(request.curve.delay_ms, 1000.0);

        let idle = shown(MarqueeConfig::new().duration(0.0));
        let request = idle.current_request().unwrap();
        assert_eq!(request.phase, MarqueePhase::Idle);
        assert!(request.is_instant());
    }

    #[test]
    fn test_content_height_centers_vertically() {
        let mut marquee = Marquee::new();
        marquee.viewport_resized(200.0, 30.0);
        marquee.appear(MarqueeConfig::new());

        let requests = marquee.content_size_measured(80.0, 10.0);
        assert_eq!(requests.len(), 2);
        assert!((requests[0].translation.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_height_change_does_not_restart_loop() {
        let mut marquee = shown(MarqueeConfig::new());
        assert!(marquee.viewport_resized(200.0, 21.0).is_empty());
        assert!(marquee.content_size_measured(80.0, 12.0).is_empty());
        assert!(marquee.phase().is_animating());

        // The next restart picks up the new centering
        let requests = marquee.content_measured(90.0);
        assert!((requests[0].translation.y - 4.5).abs() < 1e-4);
    }

    #[test]
    fn test_height_change_recenters_idle() {
        let mut marquee = shown(MarqueeConfig::new().duration(0.0));
        let requests = marquee.content_size_measured(80.0, 10.0);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].phase, MarqueePhase::Idle);
        assert!(requests[0].is_instant());
        assert!((requests[0].translation.y - 5.0).abs() < 1e-4);

        assert!(marquee.content_size_measured(80.0, 10.0).is_empty());
    }

    #[test]
    fn test_idle_alignment_ignored_while_animating() {
        let mut marquee = shown(MarqueeConfig::new());
        let requests =
            marquee.update_config(MarqueeConfig::new().idle_alignment(IdleAlignment::Center));
        assert!(requests.is_empty());
        assert!(marquee.phase().is_animating());
    }

    #[test]
    fn test_unmount_is_terminal() {
        let mut marquee = shown(MarqueeConfig::new());
        marquee.unmount();

        assert!(!marquee.is_mounted());
        assert!(marquee.appear(MarqueeConfig::new()).is_empty());
        assert!(marquee.content_measured(300.0).is_empty());
        assert!(marquee.viewport_resized(50.0, 20.0).is_empty());
        assert!(marquee.update_config(MarqueeConfig::new().duration(0.0)).is_empty());
        assert!(marquee.current_request().is_none());
        assert!(marquee.phase().is_animating());
    }
}

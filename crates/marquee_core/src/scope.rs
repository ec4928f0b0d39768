//! Scoped configuration
//!
//! Marquee parameters are set on an enclosing scope and inherited by every
//! marquee nested inside it. The scope is an explicit value handed down the
//! component tree; nothing is looked up from global state.
//!
//! ```
//! use marquee_core::{ConfigOverrides, ConfigScope, MarqueeDirection};
//!
//! let root = ConfigScope::root();
//! let page = root.nest(&ConfigOverrides::new().duration(8.0));
//! let banner = page.nest(&ConfigOverrides::new().direction(MarqueeDirection::LeftToRight));
//!
//! assert_eq!(banner.config().duration, 8.0);
//! assert_eq!(banner.config().direction, MarqueeDirection::LeftToRight);
//! ```

use crate::config::{Boundary, IdleAlignment, MarqueeConfig, MarqueeDirection};

/// A partial config: only the fields set here replace the inherited ones
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigOverrides {
    /// Seconds per scroll cycle
    pub duration: Option<f64>,
    /// Seconds to wait before each cycle
    pub delay: Option<f64>,
    /// Reverse at the end of a cycle instead of snapping back
    pub autoreverse: Option<bool>,
    /// Scroll direction
    pub direction: Option<MarqueeDirection>,
    /// Rest when the content fits the viewport
    pub stop_if_fits: Option<bool>,
    /// Resting position while idle
    pub idle_alignment: Option<IdleAlignment>,
    /// Inner or outer animation extremes
    pub boundary: Option<Boundary>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the cycle duration in seconds
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Override the delay before each cycle in seconds
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = Some(seconds);
        self
    }

    /// Override autoreverse
    pub fn autoreverse(mut self, autoreverse: bool) -> Self {
        self.autoreverse = Some(autoreverse);
        self
    }

    /// Override the scroll direction
    pub fn direction(mut self, direction: MarqueeDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Override stop-if-fits
    pub fn stop_if_fits(mut self, stop_if_fits: bool) -> Self {
        self.stop_if_fits = Some(stop_if_fits);
        self
    }

    /// Override the idle alignment
    pub fn idle_alignment(mut self, alignment: IdleAlignment) -> Self {
        self.idle_alignment = Some(alignment);
        self
    }

    /// Override the boundary mode
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Whether no field is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply these overrides on top of `base`
    pub fn apply_to(&self, base: MarqueeConfig) -> MarqueeConfig {
        MarqueeConfig {
            duration: self.duration.unwrap_or(base.duration),
            delay: self.delay.unwrap_or(base.delay),
            autoreverse: self.autoreverse.unwrap_or(base.autoreverse),
            direction: self.direction.unwrap_or(base.direction),
            stop_if_fits: self.stop_if_fits.unwrap_or(base.stop_if_fits),
            idle_alignment: self.idle_alignment.unwrap_or(base.idle_alignment),
            boundary: self.boundary.unwrap_or(base.boundary),
        }
    }
}

/// Resolved configuration for one level of the component tree
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigScope {
    config: MarqueeConfig,
    depth: u32,
}

impl ConfigScope {
    /// Outermost scope, holding the defaults
    pub fn root() -> Self {
        Self::default()
    }

    /// Outermost scope starting from an explicit config (e.g. one loaded from a file)
    pub fn with_config(config: MarqueeConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Child scope: this scope's config with `overrides` applied
    pub fn nest(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            config: overrides.apply_to(self.config),
            depth: self.depth + 1,
        }
    }

    /// The resolved config at this level
    pub fn config(&self) -> MarqueeConfig {
        self.config
    }

    /// Number of scopes between this one and the root
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl From<MarqueeConfig> for ConfigScope {
    fn from(config: MarqueeConfig) -> Self {
        Self::with_config(config)
    }
}

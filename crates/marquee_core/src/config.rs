//! Marquee configuration
//!
//! `MarqueeConfig` holds every parameter the scroll state machine reads on a
//! reset. It is a plain value: build it with the fluent setters, derive it
//! from an enclosing [`ConfigScope`](crate::scope::ConfigScope), or load it
//! from a TOML file.
//!
//! ```toml
//! duration = 6.0
//! delay = 0.5
//! direction = "left_to_right"
//! stop_if_fits = true
//! idle_alignment = "center"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default seconds for one scroll cycle
pub const DEFAULT_DURATION: f64 = 2.0;

/// Direction the content travels across the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarqueeDirection {
    /// Enters at the right edge and leaves at the left
    #[default]
    RightToLeft,
    /// Enters at the left edge and leaves at the right
    LeftToRight,
}

/// Resting horizontal position of content while the marquee is idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdleAlignment {
    /// Flush with the leading (left) edge
    #[default]
    Leading,
    /// Centered in the viewport
    Center,
    /// Flush with the trailing (right) edge
    Trailing,
}

/// Where the animated extremes sit relative to the viewport edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Extremes keep the content inside the viewport edges
    Inner,
    /// Extremes push the content fully outside the viewport
    #[default]
    Outer,
}

/// Marquee parameters, read fresh on every reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Seconds for one full scroll cycle (`0` or `inf` disables animation)
    pub duration: f64,
    /// Seconds to wait before a cycle begins or repeats
    pub delay: f64,
    /// Reverse at the end of a cycle instead of snapping back
    pub autoreverse: bool,
    /// Scroll direction
    pub direction: MarqueeDirection,
    /// Suppress animation when the content already fits the viewport
    pub stop_if_fits: bool,
    /// Resting position while idle
    pub idle_alignment: IdleAlignment,
    /// Inner or outer animation extremes
    pub boundary: Boundary,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            delay: 0.0,
            autoreverse: false,
            direction: MarqueeDirection::RightToLeft,
            stop_if_fits: false,
            idle_alignment: IdleAlignment::Leading,
            boundary: Boundary::Outer,
        }
    }
}

impl MarqueeConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cycle duration in seconds
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Set the delay before each cycle in seconds
    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    /// Set whether cycles reverse instead of snapping back
    pub fn autoreverse(mut self, autoreverse: bool) -> Self {
        self.autoreverse = autoreverse;
        self
    }

    /// Set the scroll direction
    pub fn direction(mut self, direction: MarqueeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set whether content that fits stays idle
    pub fn stop_if_fits(mut self, stop_if_fits: bool) -> Self {
        self.stop_if_fits = stop_if_fits;
        self
    }

    /// Set the idle resting position
    pub fn idle_alignment(mut self, alignment: IdleAlignment) -> Self {
        self.idle_alignment = alignment;
        self
    }

    /// Set the boundary mode
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Cycle duration when animation is enabled
    ///
    /// Returns `None` for `0`, `inf`, NaN and negative durations, all of
    /// which disable scrolling.
    pub fn effective_duration(&self) -> Option<f64> {
        let d = self.duration;
        if d.is_finite() && d > 0.0 {
            Some(d)
        } else {
            None
        }
    }

    /// Whether this config asks for scrolling at all
    pub fn is_animation_enabled(&self) -> bool {
        self.effective_duration().is_some()
    }

    /// Delay in seconds, with NaN and negative values treated as zero
    pub fn effective_delay(&self) -> f64 {
        if self.delay.is_finite() && self.delay > 0.0 {
            self.delay
        } else {
            0.0
        }
    }

    /// Check values for use from a config file
    pub fn validate(&self) -> Result<()> {
        if self.duration.is_nan() {
            return Err(ConfigError::Invalid {
                field: "duration",
                reason: "must be a number".to_string(),
            });
        }
        if self.duration < 0.0 {
            return Err(ConfigError::Invalid {
                field: "duration",
                reason: format!("must not be negative, got {}", self.duration),
            });
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ConfigError::Invalid {
                field: "delay",
                reason: format!("must be a finite, non-negative number, got {}", self.delay),
            });
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MarqueeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded marquee config from {}", path.display());
        Ok(config)
    }
}

//! Content width observation
//!
//! The host reports the content's natural width after every layout pass.
//! [`WidthObserver`] filters those reports down to real changes: the first
//! measurement always counts, later ones only when the width moved.

use marquee_core::sanitize_length;

use crate::measure::{TextLayoutOptions, TextMeasurer};

/// Deduplicates content width measurements
#[derive(Debug, Clone, Copy, Default)]
pub struct WidthObserver {
    last: Option<f32>,
}

impl WidthObserver {
    /// Create an observer that has seen no measurement yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measured width
    ///
    /// Returns the sanitized width if it is the first report or differs
    /// from the previous one, `None` otherwise.
    pub fn report(&mut self, width: f32) -> Option<f32> {
        let width = sanitize_length(width);
        if self.last == Some(width) {
            return None;
        }
        tracing::trace!("Content width changed: {:?} -> {}", self.last, width);
        self.last = Some(width);
        Some(width)
    }

    /// Measure a line of text and report its width
    pub fn observe_text(
        &mut self,
        measurer: &dyn TextMeasurer,
        text: &str,
        font_size: f32,
        options: &TextLayoutOptions,
    ) -> Option<f32> {
        let metrics = measurer.measure_with_options(text, font_size, options);
        self.report(metrics.width)
    }

    /// Last reported width, if any
    pub fn last_width(&self) -> Option<f32> {
        self.last
    }

    /// Whether at least one measurement arrived
    pub fn has_measured(&self) -> bool {
        self.last.is_some()
    }
}

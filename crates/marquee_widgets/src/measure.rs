//! Text measurement
//!
//! Marquee content is laid out on one line at its natural width. Hosts with
//! a text shaper implement [`TextMeasurer`] over it; [`EstimatedTextMeasurer`]
//! gives a usable width from character counts alone.

/// Average advance of a proportional glyph, as a fraction of font size
const PROPORTIONAL_ADVANCE: f32 = 0.55;

/// Advance of a monospace glyph, as a fraction of font size
pub const MONOSPACE_ADVANCE: f32 = 0.6;

/// Text layout options that affect measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayoutOptions {
    /// Line height multiplier (1.0 = default, 1.5 = 150%)
    pub line_height: f32,
    /// Every glyph has the same advance
    pub monospace: bool,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutOptions {
    /// Create default options
    pub fn new() -> Self {
        Self {
            line_height: 1.2,
            monospace: false,
        }
    }

    /// Set monospace font
    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }
}

/// Natural size of a single line of text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// Trait for measuring text dimensions
pub trait TextMeasurer {
    /// Measure one unwrapped line of text
    fn measure_with_options(
        &self,
        text: &str,
        font_size: f32,
        options: &TextLayoutOptions,
    ) -> TextMetrics;

    /// Measure text with default options (convenience method)
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        self.measure_with_options(text, font_size, &TextLayoutOptions::new())
    }
}

/// A text measurer that estimates from character and word counts
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_with_options(
        &self,
        text: &str,
        font_size: f32,
        options: &TextLayoutOptions,
    ) -> TextMetrics {
        let char_count = text.chars().count() as f32;
        let advance = if options.monospace {
            MONOSPACE_ADVANCE
        } else {
            PROPORTIONAL_ADVANCE
        };

        TextMetrics {
            width: char_count * font_size * advance,
            height: font_size * options.line_height,
        }
    }
}

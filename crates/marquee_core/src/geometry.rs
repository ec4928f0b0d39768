//! Measured dimensions
//!
//! Widths arrive from the host's layout pass and may be stale (zero) until
//! the first measurement. Values are sanitized on entry so the state machine
//! never sees NaN or negative sizes.

/// Clamp a measured length to a finite, non-negative value
pub fn sanitize_length(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        tracing::warn!("Ignoring invalid measured length {}, using 0", value);
        0.0
    } else if value.is_infinite() {
        f32::MAX
    } else {
        value
    }
}

/// Viewport and content measurements for one marquee
///
/// Every length passes through [`sanitize_length`] on the way in, so the
/// fields are only reachable through the setters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    /// Width of the fixed-size clipping container
    viewport_width: f32,
    /// Natural (unconstrained) width of the content
    content_width: f32,
    /// Height of the container, if known
    viewport_height: Option<f32>,
    /// Natural height of the content, if known
    content_height: Option<f32>,
}

impl Dimensions {
    /// Create dimensions from the two widths
    pub fn new(viewport_width: f32, content_width: f32) -> Self {
        Self {
            viewport_width: sanitize_length(viewport_width),
            content_width: sanitize_length(content_width),
            viewport_height: None,
            content_height: None,
        }
    }

    /// Add heights, used only to center content vertically
    pub fn with_heights(mut self, viewport_height: f32, content_height: f32) -> Self {
        self.viewport_height = Some(sanitize_length(viewport_height));
        self.content_height = Some(sanitize_length(content_height));
        self
    }

    /// Width of the fixed-size clipping container
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Natural (unconstrained) width of the content
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Height of the container, if known
    pub fn viewport_height(&self) -> Option<f32> {
        self.viewport_height
    }

    /// Natural height of the content, if known
    pub fn content_height(&self) -> Option<f32> {
        self.content_height
    }

    /// Replace the viewport width
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = sanitize_length(width);
    }

    /// Replace the viewport height
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = Some(sanitize_length(height));
    }

    /// Replace the content width
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = sanitize_length(width);
    }

    /// Replace the content height
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = Some(sanitize_length(height));
    }

    /// Whether the content is strictly narrower than the viewport
    pub fn content_fits(&self) -> bool {
        self.content_width < self.viewport_width
    }

    /// Horizontal space left over when the content is at rest (may be negative)
    pub fn slack(&self) -> f32 {
        self.viewport_width - self.content_width
    }

    /// Vertical offset that centers the content, or zero when heights are unknown
    pub fn centered_y(&self) -> f32 {
        match (self.viewport_height, self.content_height) {
            (Some(viewport), Some(content)) => 0.5 * (viewport - content),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_length(12.5), 12.5);
        assert_eq!(sanitize_length(-3.0), 0.0);
        assert_eq!(sanitize_length(f32::NAN), 0.0);
        assert_eq!(sanitize_length(0.0), 0.0);
        assert_eq!(sanitize_length(f32::INFINITY), f32::MAX);
    }

    #[test]
    fn test_fits_is_strict() {
        assert!(Dimensions::new(200.0, 80.0).content_fits());
        assert!(!Dimensions::new(200.0, 200.0).content_fits());
        assert!(!Dimensions::new(200.0, 300.0).content_fits());
        // Before measurement nothing fits
        assert!(!Dimensions::default().content_fits());
    }

    #[test]
    fn test_centered_y() {
        let dims = Dimensions::new(200.0, 80.0);
        assert_eq!(dims.centered_y(), 0.0);

        let dims = dims.with_heights(40.0, 20.0);
        assert!((dims.centered_y() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_setters_sanitize() {
        let mut dims = Dimensions::default();
        dims.set_viewport_width(f32::NAN);
        dims.set_content_width(-12.0);
        dims.set_viewport_height(f32::INFINITY);

        assert_eq!(dims.viewport_width(), 0.0);
        assert_eq!(dims.content_width(), 0.0);
        assert_eq!(dims.viewport_height(), Some(f32::MAX));
        assert_eq!(dims.content_height(), None);
    }
}

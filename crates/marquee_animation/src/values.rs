//! Animatable value types

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// A 2D translation applied to marquee content
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels
    pub y: f32,
}

impl Translation {
    /// Create a translation
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Interpolate for Translation {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Translation::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
        assert!((200.0_f32.lerp(&-80.0, 0.5) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_translation_interpolation() {
        let a = Translation::new(200.0, 10.0);
        let b = Translation::new(-80.0, 10.0);
        let mid = a.lerp(&b, 0.5);

        assert!((mid.x - 60.0).abs() < 1e-4);
        assert!((mid.y - 10.0).abs() < 1e-4);
    }
}

//! Terminal frame rendering
//!
//! The preview lays text out on a monospace grid: one character per cell,
//! the viewport a fixed number of cells wide.

use std::fmt;

use marquee_core::MarqueePhase;

/// One printed preview frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Seconds since the marquee appeared
    pub time: f32,
    /// Phase of the latest applied request
    pub phase: MarqueePhase,
    /// Content translation in pixels
    pub x: f32,
    /// What the viewport shows, one char per cell
    pub visible: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8.3}s  {:<9}  x = {:>9.2}  |{}|",
            self.time,
            phase_label(self.phase),
            self.x,
            self.visible
        )
    }
}

fn phase_label(phase: MarqueePhase) -> &'static str {
    match phase {
        MarqueePhase::Idle => "idle",
        MarqueePhase::Ready => "ready",
        MarqueePhase::Animating => "animating",
    }
}

/// Number of whole cells that fit in `viewport` pixels
pub fn columns(viewport: f32, cell: f32) -> usize {
    if cell <= 0.0 || !viewport.is_finite() {
        return 0;
    }
    (viewport / cell).floor().max(0.0) as usize
}

/// Characters of `text` visible in a viewport of `columns` cells when the
/// text is translated by `x` pixels
pub fn visible_slice(text: &str, x: f32, cell: f32, columns: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let shift = if cell > 0.0 { (x / cell).round() as i64 } else { 0 };

    (0..columns)
        .map(|col| {
            usize::try_from(col as i64 - shift)
                .ok()
                .and_then(|index| chars.get(index).copied())
                .unwrap_or(' ')
        })
        .collect()
}

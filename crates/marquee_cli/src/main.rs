//! Marquee CLI
//!
//! Preview a marquee in the terminal: lays the text out on a monospace grid,
//! drives the widget through the tween runtime and prints one line per frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marquee_core::{
    Boundary, ConfigOverrides, ConfigScope, IdleAlignment, MarqueeConfig, MarqueeDirection,
};
use marquee_widgets::{
    AnimationRuntime, EstimatedTextMeasurer, Marquee, TextLayoutOptions, TextMeasurer,
    TweenRuntime, MONOSPACE_ADVANCE,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;

use render::Frame;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preview a scrolling marquee in the terminal", long_about = None)]
struct Cli {
    /// Text to scroll
    text: String,

    /// Marquee config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value = "240")]
    viewport: f32,

    /// Font size in pixels
    #[arg(long, default_value = "16")]
    font_size: f32,

    /// Frames per second
    #[arg(long, default_value = "10")]
    fps: u32,

    /// Number of frames to print
    #[arg(long, default_value = "40")]
    frames: u32,

    /// Seconds per cycle
    #[arg(long)]
    duration: Option<f64>,

    /// Seconds to wait before each cycle
    #[arg(long)]
    delay: Option<f64>,

    /// Reverse direction on alternate cycles
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    autoreverse: Option<bool>,

    /// Scroll direction
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Rest instead of scrolling when the text fits
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    stop_if_fits: Option<bool>,

    /// Resting position when not scrolling
    #[arg(long, value_enum)]
    align: Option<AlignArg>,

    /// Whether the scroll extremes push the text outside the viewport
    #[arg(long, value_enum)]
    boundary: Option<BoundaryArg>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    RightToLeft,
    LeftToRight,
}

impl From<DirectionArg> for MarqueeDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::RightToLeft => MarqueeDirection::RightToLeft,
            DirectionArg::LeftToRight => MarqueeDirection::LeftToRight,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Leading,
    Center,
    Trailing,
}

impl From<AlignArg> for IdleAlignment {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Leading => IdleAlignment::Leading,
            AlignArg::Center => IdleAlignment::Center,
            AlignArg::Trailing => IdleAlignment::Trailing,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundaryArg {
    Inner,
    Outer,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Inner => Boundary::Inner,
            BoundaryArg::Outer => Boundary::Outer,
        }
    }
}

impl Cli {
    /// Flags given on the command line, applied over the config file
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            duration: self.duration,
            delay: self.delay,
            autoreverse: self.autoreverse,
            direction: self.direction.map(Into::into),
            stop_if_fits: self.stop_if_fits,
            idle_alignment: self.align.map(Into::into),
            boundary: self.boundary.map(Into::into),
        }
    }

    /// Config file (or defaults) with the command line flags on top
    fn scope(&self) -> Result<ConfigScope> {
        let base = match &self.config {
            Some(path) => MarqueeConfig::load_from_path(path).with_context(|| {
                format!("Failed to load marquee config from {}", path.display())
            })?,
            None => MarqueeConfig::default(),
        };

        let scope = ConfigScope::with_config(base).nest(&self.overrides());
        scope
            .config()
            .validate()
            .context("Invalid marquee options")?;
        Ok(scope)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let scope = cli.scope()?;
    cmd_preview(&cli, &scope)
}

fn cmd_preview(cli: &Cli, scope: &ConfigScope) -> Result<()> {
    for frame in preview_frames(cli, scope)? {
        println!("{}", frame);
    }
    Ok(())
}

/// Drive a marquee for `cli.frames` frames and capture each one
fn preview_frames(cli: &Cli, scope: &ConfigScope) -> Result<Vec<Frame>> {
    anyhow::ensure!(
        cli.font_size.is_finite() && cli.font_size > 0.0,
        "Font size must be a positive number, got {}",
        cli.font_size
    );
    anyhow::ensure!(cli.fps > 0, "Frame rate must be at least 1");

    let options = TextLayoutOptions::new().monospace();
    let cell = cli.font_size * MONOSPACE_ADVANCE;
    let columns = render::columns(cli.viewport, cell);
    let metrics = EstimatedTextMeasurer.measure_with_options(&cli.text, cli.font_size, &options);

    info!(
        "Previewing {:.0}px of text in a {:.0}px viewport ({} columns)",
        metrics.width, cli.viewport, columns
    );

    let mut marquee = Marquee::new();
    let mut runtime = TweenRuntime::new();

    // Layout pass, then on screen, then the content reports its size
    runtime.apply(&marquee.render(scope, cli.viewport, cli.font_size * options.line_height));
    runtime.apply(&marquee.appear(scope.config()));
    runtime.apply(&marquee.content_size_measured(metrics.width, metrics.height));

    let dt_ms = 1000.0 / cli.fps as f32;
    let mut frames = Vec::with_capacity(cli.frames as usize);
    for index in 0..cli.frames {
        if index > 0 {
            runtime.tick(dt_ms);
        }
        let x = runtime.translation().x;
        frames.push(Frame {
            time: index as f32 * dt_ms / 1000.0,
            phase: runtime.phase(),
            x,
            visible: render::visible_slice(&cli.text, x, cell, columns),
        });
    }

    marquee.unmount();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::MarqueePhase;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "marquee",
            "hello",
            "--duration",
            "5",
            "--direction",
            "left-to-right",
            "--autoreverse",
            "--align",
            "center",
        ]);
        let overrides = cli.overrides();

        assert_eq!(overrides.duration, Some(5.0));
        assert_eq!(overrides.direction, Some(MarqueeDirection::LeftToRight));
        assert_eq!(overrides.autoreverse, Some(true));
        assert_eq!(overrides.idle_alignment, Some(IdleAlignment::Center));
        assert_eq!(overrides.boundary, None);

        let config = ConfigScope::with_config(MarqueeConfig::new().delay(1.5))
            .nest(&overrides)
            .config();
        assert_eq!(config.delay, 1.5);
        assert_eq!(config.duration, 5.0);
    }

    #[test]
    fn test_explicit_false_flag() {
        let cli = Cli::parse_from(["marquee", "hi", "--stop-if-fits", "false"]);
        assert_eq!(cli.stop_if_fits, Some(false));
        assert!(cli.overrides().autoreverse.is_none());
    }

    #[test]
    fn test_preview_starts_at_ready_pose() {
        let cli = Cli::parse_from([
            "marquee",
            "Hello marquee",
            "--viewport",
            "120",
            "--frames",
            "3",
        ]);
        let frames = preview_frames(&cli, &cli.scope().unwrap()).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].phase, MarqueePhase::Animating);
        assert_eq!(frames[0].x, 120.0);
        // Fully off the right edge
        assert!(frames[0].visible.trim().is_empty());
        assert_eq!(frames[0].visible.chars().count(), 12);

        assert!(frames[1].x < frames[0].x);
        assert!((frames[1].time - 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_preview_at_rest() {
        let cli = Cli::parse_from([
            "marquee",
            "Hello marquee",
            "--viewport",
            "120",
            "--duration",
            "0",
            "--frames",
            "2",
        ]);
        let frames = preview_frames(&cli, &cli.scope().unwrap()).unwrap();

        for frame in &frames {
            assert_eq!(frame.phase, MarqueePhase::Idle);
            assert_eq!(frame.x, 0.0);
            assert!(frame.visible.starts_with("Hello marq"));
        }
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let cli = Cli::parse_from(["marquee", "hi", "--delay=-1"]);
        assert!(cli.scope().is_err());

        let cli = Cli::parse_from(["marquee", "hi", "--font-size", "0"]);
        let scope = cli.scope().unwrap();
        assert!(preview_frames(&cli, &scope).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["marquee", "hi"]);
        assert!(cli.config.is_none());
        assert!(cli.overrides().is_empty());
        assert_eq!(cli.fps, 10);
    }
}

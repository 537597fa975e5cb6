//! Command-line interface for the demo surface

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Watercolor Trail - move the pointer to paint a fading, spreading trail
#[derive(Parser, Debug, Default)]
#[command(name = "watercolor-trail")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window and trail buffer width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Window and trail buffer height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Subdivision density for fast strokes (0 = off)
    #[arg(short, long)]
    pub interpolate: Option<f32>,

    /// Write the trail buffer to this PNG when the window closes
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.trail.width = width;
        }
        if let Some(height) = self.height {
            config.trail.height = height;
        }
        if let Some(interpolate) = self.interpolate {
            config.trail.interpolate = interpolate;
        }
    }
}

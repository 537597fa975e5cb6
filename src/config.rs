//! Configuration: engine parameters plus the demo window settings.
//!
//! `TrailConfig` is fixed once a [`TrailEngine`](crate::trail::TrailEngine) is
//! built. `AppConfig` wraps it for the binary and round-trips through TOML.

use crate::blend::BlendMode;
use crate::ease::Ease;
use crate::error::{Error, Result};
use crate::queue::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Trail engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Raster width in pixels
    pub width: usize,
    /// Raster height in pixels
    pub height: usize,
    /// Milliseconds a point survives before eviction
    pub max_age: f32,
    /// Base stamp radius as a fraction of min(width, height)
    pub radius: f32,
    /// Peak alpha of a fresh stamp
    pub intensity: f32,
    /// Subdivision density for fast strokes (0 = off)
    pub interpolate: f32,
    /// Force smoothing factor; higher = slower response
    pub smoothing: f32,
    /// Floor applied to computed force
    pub min_force: f32,
    pub blend: BlendMode,
    pub ease: Ease,
    /// Drop the oldest points past this count (None = unbounded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<usize>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            max_age: 2000.0,
            radius: 0.15,
            intensity: 0.5,
            interpolate: 0.0,
            smoothing: 0.5,
            min_force: 0.3,
            blend: BlendMode::Screen,
            ease: Ease::QuarterCircleOut,
            max_points: None,
        }
    }
}

impl TrailConfig {
    /// Slower, wider, softer trail used by the watercolor surface.
    pub fn watercolor(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_age: 3000.0,
            radius: 0.1,
            intensity: 0.6,
            smoothing: 0.3,
            ..Self::default()
        }
    }

    /// Reject parameters the engine cannot run with.
    /// Returns Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.max_age.is_finite() || self.max_age <= 0.0 {
            return Err(Error::Config(format!("max_age must be > 0, got {}", self.max_age)));
        }
        for (name, value) in [
            ("radius", self.radius),
            ("intensity", self.intensity),
            ("interpolate", self.interpolate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("{name} must be >= 0, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(Error::Config(format!(
                "smoothing must be in [0, 1], got {}",
                self.smoothing
            )));
        }
        if !(0.0..=1.0).contains(&self.min_force) {
            return Err(Error::Config(format!(
                "min_force must be in [0, 1], got {}",
                self.min_force
            )));
        }
        if self.max_points == Some(0) {
            return Err(Error::Config("max_points must be > 0 when set".to_string()));
        }
        Ok(())
    }
}

/// Demo window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Paper color shown where there is no paint
    pub background: [u8; 3],
    /// Touch queue capacity (power of 2)
    pub queue_capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Watercolor Trail".to_string(),
            background: [0xf0, 0xe6, 0xd2],
            queue_capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Everything the binary reads from disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub trail: TrailConfig,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trail: TrailConfig::watercolor(640, 480),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.trail.validate()?;
        if !self.window.queue_capacity.is_power_of_two() {
            return Err(Error::Config(format!(
                "queue_capacity must be a power of 2, got {}",
                self.window.queue_capacity
            )));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise from the default location if it exists
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from("watercolor-trail.toml")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

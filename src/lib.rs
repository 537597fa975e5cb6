//! # Watercolor Trail
//!
//! A CPU trail-texture engine: pointer motion leaves a fading, spreading
//! paint-like trail in an RGBA buffer that a renderer samples every frame.
//!
//! ```no_run
//! use watercolor_trail::{TrailConfig, TrailEngine};
//!
//! let mut engine = TrailEngine::new(TrailConfig::default())?;
//! engine.add_touch_xy(0.5, 0.5);
//! engine.update(1.0 / 60.0);
//! let strength = engine.buffer().trail_strength(128, 128);
//! # Ok::<(), watercolor_trail::Error>(())
//! ```
//!
//! - [`trail`]: the engine (ingest, age/evict, composite)
//! - [`raster`]: the RGBA buffer and radial stamping
//! - [`blend`], [`ease`]: compositing modes and fade curves
//! - [`queue`]: lock-free handoff of samples from an input thread
//! - [`config`], [`cli`]: TOML config and command-line flags
//! - [`shade`], [`draw`]: the demo surface (CPU palette shading, minifb window)

pub mod blend;
pub mod cli;
pub mod config;
pub mod draw;
pub mod ease;
pub mod error;
pub mod queue;
pub mod raster;
pub mod shade;
pub mod trail;
pub mod types;

pub use blend::BlendMode;
pub use config::{AppConfig, TrailConfig, WindowConfig};
pub use ease::{Ease, Easing};
pub use error::{Error, Result};
pub use queue::{touch_queue, TouchSender, TrailDriver};
pub use raster::RasterBuffer;
pub use trail::TrailEngine;
pub use types::{FrameBuffer, TrailPoint};

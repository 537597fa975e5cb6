//! Trail-texture engine.
//!
//! Turns a stream of normalized pointer samples into an RGBA buffer that is
//! redrawn from scratch every frame:
//!
//! 1. [`TrailEngine::add_touch`] appends age-zero points (plus interpolated
//!    ones for fast strokes) and updates the smoothed stroke force.
//! 2. [`TrailEngine::update`] ages every point, evicts expired ones, then
//!    stamps each survivor as a radial gradient that fades and widens with age.
//!
//! Input never triggers a redraw; only `update` touches the buffer.

use crate::config::TrailConfig;
use crate::ease::Easing;
use crate::error::Result;
use crate::raster::{RasterBuffer, TRAIL_STOPS};
use crate::types::TrailPoint;
use glam::Vec2;
use tracing::{debug, trace};

/// Scales squared sample distance into raw force.
const FORCE_GAIN: f32 = 10_000.0;

/// Squared length of the diagonal of the unit square.
const MAX_SQUARED_SPAN: f32 = 2.0;

pub struct TrailEngine {
    config: TrailConfig,
    trail: Vec<TrailPoint>,
    force: f32,
    raster: RasterBuffer,
    needs_upload: bool,
}

impl TrailEngine {
    /// Build an engine; fails if the configuration is unusable.
    pub fn new(config: TrailConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            width = config.width,
            height = config.height,
            max_age = config.max_age,
            radius = config.radius,
            blend = ?config.blend,
            "trail engine created"
        );
        let raster = RasterBuffer::new(config.width, config.height);
        Ok(Self {
            config,
            trail: Vec::new(),
            force: 0.0,
            raster,
            needs_upload: true,
        })
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Live points, oldest first.
    pub fn points(&self) -> &[TrailPoint] {
        &self.trail
    }

    /// Current smoothed stroke force.
    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.raster
    }

    /// True after an `update` until the consumer calls [`take_upload`](Self::take_upload).
    pub fn needs_upload(&self) -> bool {
        self.needs_upload
    }

    /// Hand the buffer to the consumer if it changed since the last upload.
    pub fn take_upload(&mut self) -> Option<&RasterBuffer> {
        if std::mem::take(&mut self.needs_upload) {
            Some(&self.raster)
        } else {
            None
        }
    }

    pub fn add_touch_xy(&mut self, x: f32, y: f32) {
        self.add_touch(Vec2::new(x, y));
    }

    /// Deposit one pointer sample. Coordinates are not validated; samples
    /// outside [0,1] simply stamp off-buffer.
    pub fn add_touch(&mut self, point: Vec2) {
        if let Some(last) = self.trail.last().map(|p| p.position) {
            let delta = point - last;
            let dist = delta.length_squared();
            let raw = (dist * FORCE_GAIN).clamp(self.config.min_force, 1.0);
            if dist.is_finite() {
                let s = self.config.smoothing;
                self.force = (1.0 - s) * raw + s * self.force;
            }

            if self.config.interpolate > 0.0 {
                let steps = self.interpolation_steps(dist);
                for i in 1..steps {
                    let t = i as f32 / steps as f32;
                    self.trail.push(TrailPoint::fresh(last + delta * t, raw));
                }
            }
        }
        // The first sample of a stroke has no motion yet; store it at the floor.
        let force = self.force.max(self.config.min_force);
        self.trail.push(TrailPoint::fresh(point, force));
        self.enforce_cap();
    }

    /// Number of equal segments a jump of squared length `dist` is split into.
    /// Capped at what the longest in-range jump (corner to corner, squared
    /// length 2) needs, and at `max_points`, so a stray sample far off the
    /// surface cannot flood the trail.
    fn interpolation_steps(&self, dist: f32) -> usize {
        let spacing = self.config.radius * 0.5 / self.config.interpolate;
        let spacing2 = spacing * spacing;
        if !(spacing2 > 0.0) {
            return 1;
        }
        let steps = (dist / spacing2).ceil();
        if !steps.is_finite() || steps <= 1.0 {
            return 1;
        }
        let mut ceiling = (MAX_SQUARED_SPAN / spacing2).ceil().min(usize::MAX as f32) as usize;
        if let Some(cap) = self.config.max_points {
            ceiling = ceiling.min(cap);
        }
        (steps.min(ceiling as f32) as usize).max(1)
    }

    fn enforce_cap(&mut self) {
        if let Some(cap) = self.config.max_points {
            if self.trail.len() > cap {
                let excess = self.trail.len() - cap;
                self.trail.drain(..excess);
            }
        }
    }

    /// Drop every point and reset the force; the next update draws black.
    pub fn clear(&mut self) {
        self.trail.clear();
        self.force = 0.0;
    }

    /// Advance by `delta` seconds: age, evict, redraw.
    pub fn update(&mut self, delta: f32) {
        self.age(delta);
        self.composite();
    }

    fn age(&mut self, delta: f32) {
        let step = if delta.is_finite() && delta > 0.0 { delta * 1000.0 } else { 0.0 };
        let max_age = self.config.max_age;
        let before = self.trail.len();
        self.trail.retain_mut(|p| {
            p.age += step;
            p.age <= max_age
        });
        if self.trail.is_empty() {
            self.force = 0.0;
        }
        trace!(evicted = before - self.trail.len(), live = self.trail.len(), "aged trail");
    }

    fn composite(&mut self) {
        self.raster.clear_black();
        let (w, h) = (self.config.width as f32, self.config.height as f32);
        for point in &self.trail {
            let cx = point.position.x * w;
            let cy = (1.0 - point.position.y) * h;
            let radius = self.stamp_radius(point.age);
            let intensity = self.stamp_intensity(point.age);
            self.raster
                .stamp_radial(cx, cy, radius, intensity, &TRAIL_STOPS, self.config.blend);
        }
        self.needs_upload = true;
    }

    #[inline]
    fn age_ratio(&self, age: f32) -> f32 {
        age / self.config.max_age
    }

    /// Stamp radius in pixels for a point of the given age: grows to 3x base at max age.
    pub fn stamp_radius(&self, age: f32) -> f32 {
        let base = self.config.width.min(self.config.height) as f32 * self.config.radius;
        base + base * 2.0 * self.age_ratio(age)
    }

    /// Peak alpha of the stamp for a point of the given age.
    pub fn stamp_intensity(&self, age: f32) -> f32 {
        self.config.ease.apply(1.0 - self.age_ratio(age)) * self.config.intensity
    }
}

// Offscreen RGBA8 buffer the trail is composited into every frame.
// Visual: black where nothing was painted; white-ish glows where stamps land.
// The red channel is what downstream shading reads as "trail strength".

use crate::blend::BlendMode;
use crate::error::{Error, Result};
use image::RgbaImage;
use std::path::Path;

/// Color stop along a radial gradient: (offset in [0,1], alpha multiplier).
pub type GradientStop = (f32, f32);

/// Center at full alpha, half alpha at mid radius, transparent at the rim.
pub const TRAIL_STOPS: [GradientStop; 3] = [(0.0, 1.0), (0.5, 0.5), (1.0, 0.0)];

/// Piecewise-linear alpha at offset `t`. Stops must be sorted by offset.
#[inline]
fn gradient_alpha(stops: &[GradientStop], t: f32) -> f32 {
    let Some(&(first_t, first_a)) = stops.first() else { return 0.0 };
    if t <= first_t {
        return first_a;
    }
    for pair in stops.windows(2) {
        let (t0, a0) = pair[0];
        let (t1, a1) = pair[1];
        if t <= t1 {
            let span = t1 - t0;
            if span <= 0.0 {
                return a1;
            }
            return a0 + (a1 - a0) * ((t - t0) / span);
        }
    }
    stops[stops.len() - 1].1
}

#[inline]
fn to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[derive(Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    rgba: Vec<u8>, // 4 bytes per pixel, row-major, top row first
}

impl RasterBuffer {
    /// Allocate an opaque black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        let mut buffer = Self { width, height, rgba: vec![0u8; width * height * 4] };
        buffer.clear_black();
        buffer
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA8 bytes, suitable for a texture upload.
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Overwrite every pixel with opaque black (no blending).
    pub fn clear_black(&mut self) {
        for px in self.rgba.chunks_exact_mut(4) {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Red channel at (x,y) in [0,1]; 0 outside the buffer.
    pub fn trail_strength(&self, x: usize, y: usize) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        to_unit(self.rgba[(y * self.width + x) * 4])
    }

    /// Highest trail strength anywhere in the buffer.
    pub fn peak_strength(&self) -> f32 {
        self.rgba.chunks_exact(4).map(|px| px[0]).max().map(to_unit).unwrap_or(0.0)
    }

    /// True when every pixel is opaque black.
    pub fn is_black(&self) -> bool {
        self.rgba.chunks_exact(4).all(|px| px == [0, 0, 0, 255])
    }

    /// Composite one white radial gradient centered at (cx,cy) pixels.
    /// Only pixels whose center falls inside the circle are touched; the scan
    /// covers the bounding box clipped to the buffer, so off-buffer stamps are no-ops.
    pub fn stamp_radial(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        intensity: f32,
        stops: &[GradientStop],
        blend: BlendMode,
    ) {
        if !(radius > 0.0) || !cx.is_finite() || !cy.is_finite() || intensity <= 0.0 {
            return;
        }
        let x0 = (cx - radius).floor().max(0.0) as usize;
        let y0 = (cy - radius).floor().max(0.0) as usize;
        let x1 = ((cx + radius).ceil().max(0.0) as usize).min(self.width);
        let y1 = ((cy + radius).ceil().max(0.0) as usize).min(self.height);
        let r2 = radius * radius;

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let d2 = dx * dx + dy * dy;
                if d2 >= r2 {
                    continue; // outside the circle
                }
                let t = d2.sqrt() / radius;
                let alpha = (gradient_alpha(stops, t) * intensity).clamp(0.0, 1.0);
                if alpha <= 0.0 {
                    continue;
                }
                let idx = (y * self.width + x) * 4;
                for c in &mut self.rgba[idx..idx + 3] {
                    *c = to_u8(blend.channel(to_unit(*c), 1.0, alpha));
                }
            }
        }
    }

    /// Copy into an `image` buffer (for PNG export or inspection).
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.rgba.clone())
    }

    /// Write the buffer as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let img = self.to_image().ok_or_else(|| Error::Snapshot {
            path: path.to_path_buf(),
            reason: "buffer size does not match dimensions".to_string(),
        })?;
        img.save(path).map_err(|e| Error::Snapshot {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

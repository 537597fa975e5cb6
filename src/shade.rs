// CPU stand-in for the color-bleed fragment shader.
// Visual: paper-colored background; wherever the trail buffer is bright, a
// slowly cycling blue/coral/teal/gold wash bleeds through.

use crate::raster::RasterBuffer;
use crate::types::FrameBuffer;
use glam::{Vec2, Vec3};

const LIGHT_BLUE: Vec3 = Vec3::new(0.5, 0.8, 0.9);
const CORAL: Vec3 = Vec3::new(0.9, 0.4, 0.3);
const TEAL: Vec3 = Vec3::new(0.2, 0.7, 0.5);
const GOLD: Vec3 = Vec3::new(0.8, 0.7, 0.3);

/// Amount of grain added on top.
const NOISE_AMOUNT: f32 = 0.02;

#[inline]
fn wave(v: f32) -> f32 {
    v.sin() * 0.5 + 0.5
}

/// Classic sin-hash: deterministic per-uv grain in [0,1).
/// Uses `x - floor(x)` so negative hashes wrap like GLSL `fract`.
#[inline]
fn grain(uv: Vec2) -> f32 {
    let h = uv.dot(Vec2::new(12.9898, 78.233)).sin() * 43758.547;
    h - h.floor()
}

/// Palette color at `uv` for the given time in seconds.
pub fn cycled_color(uv: Vec2, time: f32) -> Vec3 {
    let c = LIGHT_BLUE.lerp(CORAL, wave(time * 0.5 + uv.x * 2.0 + uv.y * 2.0));
    let c = c.lerp(TEAL, wave(time * 0.7 + uv.y * 3.0));
    c.lerp(GOLD, wave(time * 0.9 + uv.x * 4.0))
}

#[inline]
fn pack(c: Vec3) -> u32 {
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    ((c.x as u32) << 16) | ((c.y as u32) << 8) | c.z as u32
}

/// Shade the whole frame. The trail is sampled nearest-neighbour, so the
/// frame and trail buffer may differ in size.
pub fn watercolor(trail: &RasterBuffer, time: f32, background: [u8; 3], out: &mut FrameBuffer) {
    let bg = Vec3::new(background[0] as f32, background[1] as f32, background[2] as f32) / 255.0;
    let (fw, fh) = (out.width.max(1) as f32, out.height.max(1) as f32);

    for y in 0..out.height {
        let ty = y * trail.height() / out.height.max(1);
        for x in 0..out.width {
            let tx = x * trail.width() / out.width.max(1);
            let uv = Vec2::new((x as f32 + 0.5) / fw, 1.0 - (y as f32 + 0.5) / fh);
            let strength = trail.trail_strength(tx, ty);
            let color = bg.lerp(cycled_color(uv, time), strength) + Vec3::splat(grain(uv) * NOISE_AMOUNT);
            out.pixels[y * out.width + x] = pack(color);
        }
    }
}

/// Show the trail buffer itself as grayscale (debug view).
pub fn raw_trail(trail: &RasterBuffer, out: &mut FrameBuffer) {
    for y in 0..out.height {
        let ty = y * trail.height() / out.height.max(1);
        for x in 0..out.width {
            let tx = x * trail.width() / out.width.max(1);
            let v = (trail.trail_strength(tx, ty) * 255.0).round() as u32;
            out.pixels[y * out.width + x] = (v << 16) | (v << 8) | v;
        }
    }
}

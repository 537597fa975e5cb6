// Core types shared by the engine and the demo window.

use glam::Vec2;

/// Window-side pixels, ready for minifb.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// One paint deposit. `force` never changes after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2, // normalized, (0,0) = bottom-left
    pub age: f32,       // milliseconds since deposit
    pub force: f32,
}

impl TrailPoint {
    #[inline]
    pub fn fresh(position: Vec2, force: f32) -> Self {
        Self { position, age: 0.0, force }
    }
}

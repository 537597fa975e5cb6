// Window for the demo surface.
// Visual effects provided here:
// 1) A window that shows the shaded trail.
// 2) Pointer samples in the trail's normalized coordinates.
// 3) Key toggles for clearing and the raw trail view.

use crate::error::Error;
use crate::types::FrameBuffer;
use glam::Vec2;
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    width: usize,
    height: usize,
}

impl Drawer {
    /// Create a window sized to the trail buffer.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window, width, height })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer in normalized coordinates: x right, y up, (0,0) = bottom-left.
    /// None while the pointer is outside the window.
    pub fn pointer(&self) -> Option<Vec2> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| normalize(x, y, self.width, self.height))
    }

    /// Clears the trail.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Toggles between the shaded view and the raw trail buffer.
    pub fn t_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::T, KeyRepeat::No)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

/// Window pixel -> normalized trail coordinate (vertical flip).
#[inline]
fn normalize(x: f32, y: f32, width: usize, height: usize) -> Vec2 {
    Vec2::new(x / width.max(1) as f32, 1.0 - y / height.max(1) as f32)
}

//! Math types and glam re-exports.
//!
//! Positions and velocities are plain `f32` pairs in window pixels, origin at
//! the top-left corner with `y` growing downward. [`ScreenSize`] is the
//! logical size of the drawable area.

pub use glam::Vec2;

/// Logical size of the window's drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width and height as floats, the way the systems consume them.
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_size_as_vec2() {
        let screen = ScreenSize::new(800, 450);
        assert_eq!(screen.as_vec2(), Vec2::new(800.0, 450.0));
    }
}

//! Window configuration.
//!
//! Everything is fixed at compile time. [`WindowConfig::default`] is the demo
//! window; the setters exist so tests and embedders can tweak a copy.

use crate::color::Color;
use crate::math::ScreenSize;

pub const DEFAULT_TITLE: &str = "rebound - bouncing rectangles";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 450;

/// Window and frame settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical size of the drawable area.
    pub size: ScreenSize,
    pub resizable: bool,
    /// Background color every frame starts from.
    pub clear_color: Color,
    /// Present with vsync (`AutoVsync`) or as fast as possible.
    pub vsync: bool,
}

impl WindowConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = ScreenSize::new(width, height);
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            size: ScreenSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            resizable: false,
            clear_color: Color::BLACK,
            vsync: true,
        }
    }
}

//! # Render — From Draw Commands to Pixels
//!
//! Render systems never talk to the GPU. They append [`FillRect`] commands to
//! a [`DrawList`], and the windowed loop hands the finished list to the wgpu
//! backend:
//!
//! ```text
//!  render systems                    RectRenderer
//!  ┌──────────────┐   DrawList   ┌─────────────────────────┐
//!  │ draw_rect    │ ───────────▶ │ tessellate: 4 verts +   │
//!  │ (per entity) │  clear color │ 6 indices per rect       │
//!  └──────────────┘  + commands  │ upload, one draw call    │
//!                                └────────────┬────────────┘
//!                                             ▼
//!                               clear → draw quads → present
//! ```
//!
//! Frame-begin is [`DrawList::new`] (which records the clear color) and
//! frame-end is submit + present in [`pass::render_frame`]. Keeping the list
//! on the CPU side means the whole frame can run headless in tests.

pub mod gpu;
pub(crate) mod pass;
pub(crate) mod pipeline;
pub(crate) mod quad;
pub(crate) mod vertex;

pub use gpu::GpuContext;

use crate::color::Color;

/// A filled, axis-aligned rectangle in integer window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

/// The draw commands for one frame, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    clear: Color,
    commands: Vec<FillRect>,
}

impl DrawList {
    /// Begin a frame that clears to `clear`.
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn clear_color(&self) -> Color {
        self.clear
    }

    /// Queue a filled rectangle. Later commands paint over earlier ones.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    pub fn commands(&self) -> &[FillRect] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

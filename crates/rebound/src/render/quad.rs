//! CPU-side tessellation of a [`DrawList`] into one vertex/index buffer.
//!
//! Rectangles are emitted in command order. There is no depth buffer, so
//! submission order is paint order. Corners are converted from window pixels
//! to clip space here, which keeps the shader a pass-through.

use super::DrawList;
use super::vertex::RectVertex;
use crate::math::{ScreenSize, Vec2};

/// Vertices and indices for every rectangle in `list`, in clip space for a
/// window of size `screen`.
///
/// Rectangles with a non-positive width or height produce no geometry.
pub(crate) fn tessellate(list: &DrawList, screen: ScreenSize) -> (Vec<RectVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(list.len() * 4);
    let mut indices = Vec::with_capacity(list.len() * 6);

    for rect in list.commands() {
        if rect.width <= 0 || rect.height <= 0 {
            continue;
        }
        let color = rect.color.to_linear();
        let min = Vec2::new(rect.x as f32, rect.y as f32);
        let max = min + Vec2::new(rect.width as f32, rect.height as f32);

        let base = vertices.len() as u32;
        for corner in [
            min,                     // 0: top-left
            Vec2::new(max.x, min.y), // 1: top-right
            max,                     // 2: bottom-right
            Vec2::new(min.x, max.y), // 3: bottom-left
        ] {
            vertices.push(RectVertex {
                position: pixel_to_clip(corner, screen).to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// Map a pixel position (origin top-left, y down) to clip space.
pub(crate) fn pixel_to_clip(pixel: Vec2, screen: ScreenSize) -> Vec2 {
    let size = screen.as_vec2().max(Vec2::ONE);
    Vec2::new(pixel.x / size.x * 2.0 - 1.0, 1.0 - pixel.y / size.y * 2.0)
}

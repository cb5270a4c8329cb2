//! # Vertex — Per-Corner Data Sent to the GPU
//!
//! Every rectangle becomes four vertices. Positions are already in clip space
//! (converted on the CPU from window pixels), so the vertex shader passes them
//! straight through and no uniform buffer is needed.
//!
//! ```text
//! RectVertex (24 bytes per vertex)
//! ┌────────────────┬────────────────────────┐
//! │ position       │ color (linear)         │
//! │ [f32; 2]       │ [f32; 4]               │
//! │ offset 0       │ offset 8               │
//! │ location(0)    │ location(1)            │
//! └────────────────┴────────────────────────┘
//! ```

use bytemuck::{Pod, Zeroable};

/// Per-vertex data for rectangle quads.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub(crate) struct RectVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl RectVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<RectVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color
            wgpu::VertexAttribute {
                offset: 8,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_match_struct_sizes() {
        assert_eq!(std::mem::size_of::<RectVertex>(), 24);
        assert_eq!(RectVertex::LAYOUT.array_stride, 24);
    }
}

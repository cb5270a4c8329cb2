//! # Pipeline — GPU State for Flat Rectangles
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ RenderPipeline                                       │
//! │                                                      │
//! │  Shader module ─── vs_main + fs_main (shader.wgsl)   │
//! │  Vertex layout ─── RectVertex { position, color }    │
//! │  Bind groups   ─── none, positions are clip space    │
//! │  Blend state   ─── ALPHA_BLENDING                    │
//! │  Primitive     ─── TriangleList, no culling          │
//! │  Depth/stencil ─── None, paint order = command order │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Vertex and index buffers are rebuilt every frame. With a handful of
//! rectangles that's a few hundred bytes.

use wgpu::util::DeviceExt;

use super::DrawList;
use super::gpu::GpuContext;
use super::quad::tessellate;
use super::vertex::RectVertex;
use crate::math::ScreenSize;

/// GPU resources for the rectangle renderer.
pub(crate) struct RectRenderer {
    pipeline: wgpu::RenderPipeline,
}

/// One frame's uploaded geometry.
struct FrameGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl RectRenderer {
    /// Create the rectangle renderer from the current GPU context.
    pub fn new(gpu: &GpuContext) -> Self {
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rect shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("rect pipeline layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("rect pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[RectVertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self { pipeline }
    }

    /// Record a pass that clears to the list's clear color and draws every
    /// rectangle in it.
    pub fn draw(
        &self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        list: &DrawList,
        screen: ScreenSize,
    ) {
        let geometry = upload(gpu, list, screen);

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rect render pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(list.clear_color().to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some(geometry) = &geometry {
            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            render_pass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..geometry.index_count, 0, 0..1);
        }
    }
}

/// Tessellate and upload the list. `None` when there is nothing to draw.
fn upload(gpu: &GpuContext, list: &DrawList, screen: ScreenSize) -> Option<FrameGeometry> {
    let (vertices, indices) = tessellate(list, screen);
    if indices.is_empty() {
        return None;
    }

    let vertex_buffer = gpu.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("rect vertex buffer"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = gpu.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("rect index buffer"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    Some(FrameGeometry {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
    })
}

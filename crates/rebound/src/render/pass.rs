//! Frame submission.
//!
//! [`render_frame`] is the frame-end half of the bracket: acquire the
//! surface texture, record the rectangle pass, submit, present.

use super::DrawList;
use super::gpu::GpuContext;
use super::pipeline::RectRenderer;
use crate::math::ScreenSize;

/// Draw `list` to the window surface and present it.
///
/// Surface errors are returned to the caller, which decides whether to
/// reconfigure, skip the frame, or give up.
pub(crate) fn render_frame(
    gpu: &GpuContext,
    renderer: &RectRenderer,
    list: &DrawList,
    screen: ScreenSize,
) -> Result<(), wgpu::SurfaceError> {
    let output = gpu.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("rebound frame encoder"),
        });

    renderer.draw(gpu, &mut encoder, &view, list, screen);

    gpu.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

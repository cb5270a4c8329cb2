//! Application-level errors.
//!
//! [`AppError`] covers everything that can stop the program: the windowing
//! and GPU stack failing to come up, and a frame failing because a system hit
//! a malformed entity.

use thiserror::Error;

use crate::ecs::EcsError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create GPU surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("GPU surface reports no supported texture formats")]
    NoSurfaceFormat,

    #[error("out of GPU memory")]
    OutOfMemory,

    #[error("frame failed: {0}")]
    Frame(#[from] EcsError),
}

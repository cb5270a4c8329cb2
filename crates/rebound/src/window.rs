//! Window management via winit.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the event
//! loop: window + GPU creation on `resumed`, one frame per `RedrawRequested`,
//! and teardown when the window is asked to close.
//!
//! ```text
//!            close requested / Escape
//!  Running ───────────────────────────▶ Closing ──▶ exit
//!    │  ▲                                 drop renderer, GPU, window
//!    └──┘ RedrawRequested: time → update → render → request_redraw
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::error::AppError;
use crate::game::Game;
use crate::math::ScreenSize;
use crate::render::GpuContext;
use crate::render::pass::render_frame;
use crate::render::pipeline::RectRenderer;
use crate::time::Time;

/// Main loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopState {
    Running,
    Closing,
}

/// What the loop does after a failed present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceAction {
    /// The surface went stale; reconfigure it and carry on.
    Reconfigure,
    /// Stop the loop.
    Fatal,
    /// Drop this frame and try again next redraw.
    Skip,
}

pub(crate) fn surface_action(err: &wgpu::SurfaceError) -> SurfaceAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => SurfaceAction::Fatal,
        _ => SurfaceAction::Skip,
    }
}

/// The application state that winit drives.
pub(crate) struct WinitApp {
    game: Game,
    time: Time,
    state: LoopState,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<RectRenderer>,
    /// The error that ended the loop, if any.
    failure: Option<AppError>,
}

impl WinitApp {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            time: Time::new(),
            state: LoopState::Running,
            window: None,
            gpu: None,
            renderer: None,
            failure: None,
        }
    }

    /// Consume the app after the event loop returns.
    pub fn finish(self) -> Result<(), AppError> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Create the window and GPU context, then run the game's startup.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let config = self.game.config().clone();
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.size.width, config.size.height))
            .with_resizable(config.resizable);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let gpu = GpuContext::new(window.clone(), config.vsync)?;
        let renderer = RectRenderer::new(&gpu);
        log::info!(
            "window \"{}\" created at {}x{}",
            config.title,
            config.size.width,
            config.size.height
        );

        self.window = Some(window.clone());
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);

        self.game.start(self.screen_size())?;

        // The first frame's delta starts here, not at process start.
        self.time = Time::new();
        window.request_redraw();
        Ok(())
    }

    /// Logical size of the drawable area.
    fn screen_size(&self) -> ScreenSize {
        match &self.window {
            Some(window) => {
                let size = window.inner_size().to_logical::<u32>(window.scale_factor());
                ScreenSize::new(size.width, size.height)
            }
            None => self.game.config().size,
        }
    }

    /// One iteration of the main loop.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.state != LoopState::Running {
            return;
        }

        self.time.update();
        let screen = self.screen_size();

        let draw = match self.game.frame(self.time.delta_secs(), screen) {
            Ok(draw) => draw,
            Err(err) => {
                self.fail(event_loop, err.into());
                return;
            }
        };

        let result = match (&self.gpu, &self.renderer) {
            (Some(gpu), Some(renderer)) => render_frame(gpu, renderer, &draw, screen),
            _ => Ok(()),
        };
        if let Err(err) = result {
            match surface_action(&err) {
                SurfaceAction::Reconfigure => {
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.reconfigure();
                    }
                }
                SurfaceAction::Fatal => {
                    self.fail(event_loop, AppError::OutOfMemory);
                    return;
                }
                SurfaceAction::Skip => {
                    log::warn!("surface error, skipping frame: {err:?}");
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Running → Closing: release the GPU and the window, stop the loop.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.state == LoopState::Closing {
            return;
        }
        self.state = LoopState::Closing;
        log::info!(
            "closing after {} frames ({:.1}s)",
            self.time.frame_count(),
            self.time.elapsed().as_secs_f32()
        );

        self.renderer = None;
        self.gpu = None;
        self.window = None;
        event_loop.exit();
    }

    /// Record the error (reported by the caller of `Game::run`) and close.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        self.failure.get_or_insert(err);
        self.close(event_loop);
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.state == LoopState::Closing {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.close(event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    log::info!("escape pressed");
                    self.close(event_loop);
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;

    #[test]
    fn starts_running_without_a_window() {
        let app = WinitApp::new(Game::new(WindowConfig::default()));
        assert_eq!(app.state, LoopState::Running);
        assert_eq!(app.screen_size(), ScreenSize::new(800, 450));
        assert!(app.finish().is_ok());
    }

    #[test]
    fn stale_surface_is_reconfigured() {
        assert_eq!(surface_action(&wgpu::SurfaceError::Lost), SurfaceAction::Reconfigure);
        assert_eq!(surface_action(&wgpu::SurfaceError::Outdated), SurfaceAction::Reconfigure);
    }

    #[test]
    fn out_of_memory_stops_the_loop() {
        assert_eq!(surface_action(&wgpu::SurfaceError::OutOfMemory), SurfaceAction::Fatal);
    }

    #[test]
    fn other_surface_errors_skip_the_frame() {
        assert_eq!(surface_action(&wgpu::SurfaceError::Timeout), SurfaceAction::Skip);
        assert_eq!(surface_action(&wgpu::SurfaceError::Other), SurfaceAction::Skip);
    }
}

//! Game builder and frame driver.
//!
//! [`Game`] owns the [`World`] and the [`Schedule`]. Register a startup
//! function with [`setup`](Game::setup), then call [`run`](Game::run) to open
//! the window and start the loop.
//!
//! # Example
//!
//! ```ignore
//! use rebound::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     rebound::logging::init();
//!     Game::new(WindowConfig::default())
//!         .setup(rebound::scene::populate)
//!         .run()
//! }
//! ```
//!
//! Each frame is input (nothing to do yet), update, render. [`frame`](Game::frame)
//! runs exactly that without a window, which is how the loop is tested.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::WindowConfig;
use crate::ecs::{EcsError, Schedule, Tick, World};
use crate::error::AppError;
use crate::math::ScreenSize;
use crate::render::DrawList;
use crate::window::WinitApp;

type StartupSystem = Box<dyn FnMut(&mut World, &mut Schedule, ScreenSize) -> Result<(), EcsError>>;

/// The game: world, systems, and the window they run in.
pub struct Game {
    config: WindowConfig,
    world: World,
    schedule: Schedule,
    startup_systems: Vec<StartupSystem>,
    started: bool,
}

impl Game {
    /// Create a game with an empty world and no systems.
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            world: World::new(),
            schedule: Schedule::new(),
            startup_systems: Vec::new(),
            started: false,
        }
    }

    /// Register a function that runs once, after the window exists, to
    /// populate the world and register systems.
    pub fn setup(
        mut self,
        system: impl FnMut(&mut World, &mut Schedule, ScreenSize) -> Result<(), EcsError> + 'static,
    ) -> Self {
        self.startup_systems.push(Box::new(system));
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Run the startup functions. Only the first call does anything.
    pub fn start(&mut self, screen: ScreenSize) -> Result<(), EcsError> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        for system in &mut self.startup_systems {
            system(&mut self.world, &mut self.schedule, screen)?;
        }
        log::info!(
            "started with {} update and {} render systems",
            self.schedule.update_names().len(),
            self.schedule.render_names().len()
        );
        Ok(())
    }

    /// Run one frame: input, every update system, then every render system.
    ///
    /// Returns the frame's draw commands. A system error fails the whole frame.
    pub fn frame(&mut self, elapsed: f32, screen: ScreenSize) -> Result<DrawList, EcsError> {
        self.process_input();

        let tick = Tick { elapsed, screen };
        self.schedule.run_update(&mut self.world, &tick)?;

        let mut draw = DrawList::new(self.config.clear_color);
        self.schedule.run_render(&self.world, &mut draw)?;
        Ok(draw)
    }

    /// Nothing reads input yet. The close signal is handled by the window.
    fn process_input(&mut self) {}

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = WinitApp::new(self);
        event_loop.run_app(&mut app)?;
        app.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::ecs::{ComponentKind, EntityId, Position, Rectangle, Velocity};
    use crate::render::FillRect;
    use crate::scene;

    const SCREEN: ScreenSize = ScreenSize::new(800, 450);

    fn one_square(world: &mut World, schedule: &mut Schedule, _: ScreenSize) -> Result<(), EcsError> {
        world
            .spawn("1")
            .insert(Position::new(790.0, 10.0))
            .insert(Velocity::new(80.0, 80.0))
            .insert(Rectangle::new(20.0, 20.0, Color::BLUE))
            .finish()?;
        scene::register_systems(schedule);
        Ok(())
    }

    #[test]
    fn frame_moves_bounces_then_draws() {
        let mut game = Game::new(WindowConfig::default()).setup(one_square);
        game.start(SCREEN).unwrap();

        let draw = game.frame(1.0, SCREEN).unwrap();

        let id = EntityId::new("1");
        assert_eq!(game.world().position(&id).unwrap(), &Position::new(780.0, 90.0));
        assert_eq!(game.world().velocity(&id).unwrap(), &Velocity::new(-80.0, 80.0));
        assert_eq!(draw.clear_color(), Color::BLACK);
        assert_eq!(
            draw.commands(),
            &[FillRect {
                x: 780,
                y: 90,
                width: 20,
                height: 20,
                color: Color::BLUE,
            }]
        );
    }

    #[test]
    fn start_runs_setup_once() {
        let mut game = Game::new(WindowConfig::default()).setup(scene::populate);
        game.start(SCREEN).unwrap();
        game.start(SCREEN).unwrap();
        assert_eq!(game.world().len(ComponentKind::Transform), 3);
        assert_eq!(game.schedule().update_names(), ["movement", "bounce"]);
    }

    #[test]
    fn setup_error_is_reported() {
        let mut game = Game::new(WindowConfig::default())
            .setup(scene::populate)
            .setup(scene::populate);
        let err = game.start(SCREEN).unwrap_err();
        assert!(matches!(err, EcsError::DuplicateComponent { .. }));
    }

    #[test]
    fn demo_scene_draws_three_rects_per_frame() {
        let mut game = Game::new(WindowConfig::default()).setup(scene::populate);
        game.start(SCREEN).unwrap();
        for _ in 0..120 {
            let draw = game.frame(1.0 / 60.0, SCREEN).unwrap();
            assert_eq!(draw.len(), 3);
            // Every rectangle stays on screen after the bounce pass.
            for rect in draw.commands() {
                assert!(rect.x >= 0 && rect.x + rect.width <= 800, "{rect:?}");
                assert!(rect.y >= 0 && rect.y + rect.height <= 450, "{rect:?}");
            }
        }
    }

    #[test]
    fn malformed_entity_fails_the_frame() {
        let mut game = Game::new(WindowConfig::default()).setup(
            |world: &mut World, schedule: &mut Schedule, _: ScreenSize| {
                world.insert("orphan", Position::new(0.0, 0.0))?;
                scene::register_systems(schedule);
                Ok(())
            },
        );
        game.start(SCREEN).unwrap();

        let err = game.frame(0.016, SCREEN).unwrap_err();
        assert_eq!(
            err,
            EcsError::MissingComponent {
                entity: EntityId::new("orphan"),
                kind: ComponentKind::Speed,
            }
        );
    }

    #[test]
    fn frame_before_start_draws_nothing() {
        let mut game = Game::new(WindowConfig::default().clear_color(Color::WHITE));
        let draw = game.frame(0.016, SCREEN).unwrap();
        assert!(draw.is_empty());
        assert_eq!(draw.clear_color(), Color::WHITE);
    }
}

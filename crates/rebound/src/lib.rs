//! # Rebound — Bouncing Rectangles on a Tiny ECS
//!
//! A handful of colored rectangles bounce around an 800×450 window. Each
//! rectangle is an entity made of three components (position, velocity and a
//! drawable rectangle). Two update systems move and bounce them, one render
//! system draws them.
//!
//! Start with `use rebound::prelude::*`, build a [`Game`](game::Game) and
//! call [`run`](game::Game::run).

pub mod color;
pub mod config;
pub mod ecs;
pub mod error;
pub mod game;
pub mod logging;
pub mod math;
pub mod prelude;
pub mod render;
pub mod scene;
pub mod systems;
pub mod time;
pub(crate) mod window;

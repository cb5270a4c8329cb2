//! Convenience re-exports. `use rebound::prelude::*` brings in everything a
//! scene needs.

pub use crate::color::Color;
pub use crate::config::WindowConfig;
pub use crate::ecs::{
    ComponentKind, EcsError, EntityId, Position, Rectangle, Schedule, Tick, Velocity, World,
};
pub use crate::error::AppError;
pub use crate::game::Game;
pub use crate::math::{ScreenSize, Vec2};
pub use crate::render::{DrawList, FillRect};

//! # System — Per-Component Functions
//!
//! A system is a function paired with a [`ComponentKind`]. Each frame the
//! [`Schedule`] walks its systems in registration order and calls each one
//! once for every component of its kind, passing the owning entity id. The
//! system looks up whatever sibling components it needs through the world.
//!
//! Update systems get `&mut World` and the frame's [`Tick`]. Render systems
//! get `&World` and the frame's [`DrawList`], so they can't touch component
//! state even by accident.
//!
//! ## Failure
//!
//! Systems return `Result<(), EcsError>`. The first error stops the pass and
//! is handed back to the caller, which fails the frame.

use super::component::ComponentKind;
use super::entity::EntityId;
use super::error::EcsError;
use super::world::World;
use crate::math::ScreenSize;
use crate::render::DrawList;

/// Per-frame input to update systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds since the previous frame.
    pub elapsed: f32,
    /// Logical size of the window this frame.
    pub screen: ScreenSize,
}

/// A per-component update function.
pub trait UpdateSystem {
    fn update(&mut self, world: &mut World, entity: &EntityId, tick: &Tick) -> Result<(), EcsError>;
}

impl<F> UpdateSystem for F
where
    F: FnMut(&mut World, &EntityId, &Tick) -> Result<(), EcsError>,
{
    fn update(&mut self, world: &mut World, entity: &EntityId, tick: &Tick) -> Result<(), EcsError> {
        (self)(world, entity, tick)
    }
}

/// A per-component render function.
pub trait RenderSystem {
    fn render(&mut self, world: &World, entity: &EntityId, draw: &mut DrawList) -> Result<(), EcsError>;
}

impl<F> RenderSystem for F
where
    F: FnMut(&World, &EntityId, &mut DrawList) -> Result<(), EcsError>,
{
    fn render(&mut self, world: &World, entity: &EntityId, draw: &mut DrawList) -> Result<(), EcsError> {
        (self)(world, entity, draw)
    }
}

/// A system bound to a component kind, with a short name for logs.
struct Registered<S: ?Sized> {
    kind: ComponentKind,
    name: String,
    system: Box<S>,
}

/// The ordered update and render systems.
#[derive(Default)]
pub struct Schedule {
    update: Vec<Registered<dyn UpdateSystem>>,
    render: Vec<Registered<dyn RenderSystem>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an update system that runs for every component of `kind`.
    pub fn add_update<S: UpdateSystem + 'static>(&mut self, kind: ComponentKind, system: S) -> &mut Self {
        let name = short_system_name(std::any::type_name::<S>());
        log::debug!("registered update system `{name}` for {kind}");
        let system: Box<dyn UpdateSystem> = Box::new(system);
        self.update.push(Registered { kind, name, system });
        self
    }

    /// Append a render system that runs for every component of `kind`.
    pub fn add_render<S: RenderSystem + 'static>(&mut self, kind: ComponentKind, system: S) -> &mut Self {
        let name = short_system_name(std::any::type_name::<S>());
        log::debug!("registered render system `{name}` for {kind}");
        let system: Box<dyn RenderSystem> = Box::new(system);
        self.render.push(Registered { kind, name, system });
        self
    }

    /// Run every update system, in order, against every component of its kind.
    pub fn run_update(&mut self, world: &mut World, tick: &Tick) -> Result<(), EcsError> {
        for registered in &mut self.update {
            for entity in world.entities(registered.kind) {
                registered.system.update(world, &entity, tick)?;
            }
        }
        Ok(())
    }

    /// Run every render system, in order, against every component of its kind.
    pub fn run_render(&mut self, world: &World, draw: &mut DrawList) -> Result<(), EcsError> {
        for registered in &mut self.render {
            for entity in world.entities(registered.kind) {
                registered.system.render(world, &entity, draw)?;
            }
        }
        Ok(())
    }

    /// Update system names in execution order.
    pub fn update_names(&self) -> Vec<&str> {
        self.update.iter().map(|r| r.name.as_str()).collect()
    }

    /// Render system names in execution order.
    pub fn render_names(&self) -> Vec<&str> {
        self.render.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Strip the module path from a fully-qualified type name, keeping only the
/// last segment (e.g. `rebound::systems::movement` → `movement`,
/// `{{closure}}` → `<closure>`).
fn short_system_name(full: &str) -> String {
    let name = full.rsplit("::").next().unwrap_or(full);
    if name.contains("closure") {
        "<closure>".to_string()
    } else {
        name.to_string()
    }
}

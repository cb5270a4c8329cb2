//! # World — The Component Store
//!
//! The [`World`] owns every component, grouped by kind. It is built once
//! during setup and then only mutated in place by update systems.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ World                                                    │
//! │                                                          │
//! │  collections: HashMap<ComponentKind, Vec<Component>>     │
//! │    insertion order = iteration order for systems         │
//! │                                                          │
//! │  slots: HashMap<ComponentKind, HashMap<EntityId, usize>> │
//! │    entity id → index into that kind's collection         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no removal API. Components live for the whole process, so a slot
//! index never goes stale.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::component::{Component, ComponentData, ComponentKind, Position, Rectangle, Velocity};
use super::entity::EntityId;
use super::error::EcsError;

/// The central container for all component data.
#[derive(Debug, Default)]
pub struct World {
    /// Ordered components per kind.
    collections: HashMap<ComponentKind, Vec<Component>>,
    /// Per-kind index from entity id to position in `collections`.
    slots: HashMap<ComponentKind, HashMap<EntityId, usize>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start attaching components to `entity`.
    pub fn spawn(&mut self, entity: impl Into<EntityId>) -> EntityBuilder<'_> {
        EntityBuilder {
            world: self,
            entity: entity.into(),
            error: None,
        }
    }

    /// Attach a component to an entity. The kind is taken from the payload.
    ///
    /// Returns [`EcsError::DuplicateComponent`] if the entity already has a
    /// component of that kind.
    pub fn insert(
        &mut self,
        entity: impl Into<EntityId>,
        data: impl Into<ComponentData>,
    ) -> Result<(), EcsError> {
        let entity = entity.into();
        let data = data.into();
        let kind = data.kind();

        let collection = self.collections.entry(kind).or_default();
        match self.slots.entry(kind).or_default().entry(entity.clone()) {
            Entry::Occupied(_) => Err(EcsError::DuplicateComponent { entity, kind }),
            Entry::Vacant(slot) => {
                slot.insert(collection.len());
                collection.push(Component::new(entity, data));
                Ok(())
            }
        }
    }

    /// All components of a kind, in insertion order.
    pub fn get(&self, kind: ComponentKind) -> &[Component] {
        self.collections.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Owning entity ids of every component of a kind, in insertion order.
    ///
    /// Systems iterate this snapshot so they can take `&mut World` per
    /// component.
    pub fn entities(&self, kind: ComponentKind) -> Vec<EntityId> {
        self.get(kind).iter().map(|c| c.entity().clone()).collect()
    }

    /// Number of components of a kind.
    pub fn len(&self, kind: ComponentKind) -> usize {
        self.get(kind).len()
    }

    /// Returns `true` if the world holds no components at all.
    pub fn is_empty(&self) -> bool {
        self.collections.values().all(Vec::is_empty)
    }

    /// Kinds that currently hold at least one component, in [`ComponentKind::ALL`] order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(|kind| !self.get(*kind).is_empty())
    }

    /// Returns `true` if `entity` has a component of `kind`.
    pub fn contains(&self, kind: ComponentKind, entity: &EntityId) -> bool {
        self.slot(kind, entity).is_some()
    }

    /// The component of `kind` owned by `entity`.
    pub fn component(&self, kind: ComponentKind, entity: &EntityId) -> Result<&Component, EcsError> {
        let slot = self.slot(kind, entity).ok_or_else(|| missing(entity, kind))?;
        self.collections
            .get(&kind)
            .and_then(|c| c.get(slot))
            .ok_or_else(|| missing(entity, kind))
    }

    /// Mutable access to the component of `kind` owned by `entity`.
    pub fn component_mut(
        &mut self,
        kind: ComponentKind,
        entity: &EntityId,
    ) -> Result<&mut Component, EcsError> {
        let slot = self.slot(kind, entity).ok_or_else(|| missing(entity, kind))?;
        self.collections
            .get_mut(&kind)
            .and_then(|c| c.get_mut(slot))
            .ok_or_else(|| missing(entity, kind))
    }

    // ── Typed accessors ──────────────────────────────────────────────

    pub fn position(&self, entity: &EntityId) -> Result<&Position, EcsError> {
        self.component(ComponentKind::Transform, entity)?
            .as_position()
            .ok_or_else(|| missing(entity, ComponentKind::Transform))
    }

    pub fn position_mut(&mut self, entity: &EntityId) -> Result<&mut Position, EcsError> {
        self.component_mut(ComponentKind::Transform, entity)?
            .as_position_mut()
            .ok_or_else(|| missing(entity, ComponentKind::Transform))
    }

    pub fn velocity(&self, entity: &EntityId) -> Result<&Velocity, EcsError> {
        self.component(ComponentKind::Speed, entity)?
            .as_velocity()
            .ok_or_else(|| missing(entity, ComponentKind::Speed))
    }

    pub fn velocity_mut(&mut self, entity: &EntityId) -> Result<&mut Velocity, EcsError> {
        self.component_mut(ComponentKind::Speed, entity)?
            .as_velocity_mut()
            .ok_or_else(|| missing(entity, ComponentKind::Speed))
    }

    pub fn rectangle(&self, entity: &EntityId) -> Result<&Rectangle, EcsError> {
        self.component(ComponentKind::GraphicsRect, entity)?
            .as_rectangle()
            .ok_or_else(|| missing(entity, ComponentKind::GraphicsRect))
    }

    fn slot(&self, kind: ComponentKind, entity: &EntityId) -> Option<usize> {
        self.slots.get(&kind)?.get(entity).copied()
    }
}

fn missing(entity: &EntityId, kind: ComponentKind) -> EcsError {
    EcsError::MissingComponent {
        entity: entity.clone(),
        kind,
    }
}

// ── EntityBuilder ────────────────────────────────────────────────────────

/// Builder for attaching several components to one entity.
///
/// Returned by [`World::spawn`]. The first failing insert is remembered and
/// reported by [`finish`](EntityBuilder::finish); later inserts are skipped.
///
/// ```ignore
/// world
///     .spawn("1")
///     .insert(Position::new(10.0, 10.0))
///     .insert(Velocity::new(80.0, 80.0))
///     .finish()?;
/// ```
pub struct EntityBuilder<'w> {
    world: &'w mut World,
    entity: EntityId,
    error: Option<EcsError>,
}

impl<'w> EntityBuilder<'w> {
    /// Add a component to this entity.
    pub fn insert(mut self, data: impl Into<ComponentData>) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.world.insert(&self.entity, data) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finish building, returning the entity id or the first insert error.
    pub fn finish(self) -> Result<EntityId, EcsError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.entity),
        }
    }
}

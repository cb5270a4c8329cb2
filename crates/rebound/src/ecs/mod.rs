//! # Kind-Keyed ECS
//!
//! A deliberately small Entity Component System. There are exactly three
//! component kinds, so instead of type-erased archetype columns the store is
//! a map from [`ComponentKind`] to an ordered `Vec` of components whose
//! payload is a plain enum.
//!
//! ## Module Overview
//!
//! - [`entity`] — String entity ids
//! - [`component`] — Component kinds and payloads
//! - [`world`] — Per-kind collections plus an entity → slot index per kind
//! - [`system`] — Update/render systems and the schedule that runs them
//! - [`error`] — What can go wrong when systems look up siblings
//!
//! ## Sibling Lookups
//!
//! A system runs once per component of its kind and usually needs the other
//! components of the same entity (motion needs the velocity, bounce needs the
//! position and the rectangle). The world keeps a `HashMap<EntityId, usize>`
//! per kind so those lookups are O(1), and a missing sibling comes back as
//! [`EcsError::MissingComponent`] instead of a dangling reference.

pub mod component;
pub mod entity;
pub mod error;
pub mod system;
pub mod world;

pub use component::{Component, ComponentData, ComponentKind, Position, Rectangle, Velocity};
pub use entity::EntityId;
pub use error::EcsError;
pub use system::{Schedule, Tick};
pub use world::{EntityBuilder, World};

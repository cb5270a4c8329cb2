//! # Component — Kinds and Payloads
//!
//! Every component belongs to one of three kinds. The payload is an enum, so
//! a system matches on the variant it expects instead of casting an untyped
//! value, and the kind is always derived from the payload: a `Transform`
//! component can only ever hold a [`Position`].
//!
//! ```text
//! kind            name             payload
//! ─────────────── ──────────────── ───────────────────────────────
//! Transform       "Transform"      Position  { x, y }
//! Speed           "Speed"          Velocity  { x, y }
//! GraphicsRect    "Graphics:Rect"  Rectangle { offset, size, color }
//! ```

use std::fmt;

use super::entity::EntityId;
use crate::color::Color;
use crate::math::Vec2;

/// The kind of a component. Each kind has its own ordered collection in the
/// [`World`](super::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Transform,
    Speed,
    GraphicsRect,
}

impl ComponentKind {
    pub const ALL: [Self; 3] = [Self::Transform, Self::Speed, Self::GraphicsRect];

    /// Display name used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Speed => "Speed",
            Self::GraphicsRect => "Graphics:Rect",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-left corner of an entity, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Velocity in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// An axis-aligned filled rectangle drawn relative to the entity's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Rectangle {
    /// A rectangle with no offset.
    pub const fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            width,
            height,
            color,
        }
    }

    /// Set the draw offset from the entity's position.
    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Width and height as a vector.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// The payload of a component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComponentData {
    Position(Position),
    Velocity(Velocity),
    Rectangle(Rectangle),
}

impl ComponentData {
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => ComponentKind::Transform,
            Self::Velocity(_) => ComponentKind::Speed,
            Self::Rectangle(_) => ComponentKind::GraphicsRect,
        }
    }
}

impl From<Position> for ComponentData {
    fn from(p: Position) -> Self {
        Self::Position(p)
    }
}

impl From<Velocity> for ComponentData {
    fn from(v: Velocity) -> Self {
        Self::Velocity(v)
    }
}

impl From<Rectangle> for ComponentData {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

/// A component record: the owning entity plus its payload.
///
/// The payload is only reachable mutably through the typed accessors, which
/// keeps the variant (and therefore the kind) fixed for the component's
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    entity: EntityId,
    data: ComponentData,
}

impl Component {
    pub fn new(entity: EntityId, data: ComponentData) -> Self {
        Self { entity, data }
    }

    pub fn entity(&self) -> &EntityId {
        &self.entity
    }

    pub fn as_position(&self) -> Option<&Position> {
        match &self.data {
            ComponentData::Position(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_position_mut(&mut self) -> Option<&mut Position> {
        match &mut self.data {
            ComponentData::Position(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_velocity(&self) -> Option<&Velocity> {
        match &self.data {
            ComponentData::Velocity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_velocity_mut(&mut self) -> Option<&mut Velocity> {
        match &mut self.data {
            ComponentData::Velocity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match &self.data {
            ComponentData::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_payload() {
        assert_eq!(ComponentData::from(Position::new(1.0, 2.0)).kind(), ComponentKind::Transform);
        assert_eq!(ComponentData::from(Velocity::new(1.0, 2.0)).kind(), ComponentKind::Speed);
        assert_eq!(
            ComponentData::from(Rectangle::new(4.0, 4.0, Color::RED)).kind(),
            ComponentKind::GraphicsRect
        );
    }

    #[test]
    fn kind_names() {
        let names: Vec<_> = ComponentKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["Transform", "Speed", "Graphics:Rect"]);
    }

    #[test]
    fn typed_accessors_reject_other_variants() {
        let mut c = Component::new(EntityId::new("1"), Velocity::new(3.0, 4.0).into());
        assert!(c.as_position().is_none());
        assert!(c.as_rectangle().is_none());
        c.as_velocity_mut().unwrap().x = -3.0;
        assert_eq!(c.as_velocity(), Some(&Velocity::new(-3.0, 4.0)));
    }

    #[test]
    fn rectangle_builder() {
        let r = Rectangle::new(20.0, 10.0, Color::BLUE).offset(2.0, -1.0);
        assert_eq!((r.offset_x, r.offset_y), (2.0, -1.0));
        assert_eq!(r.extent(), Vec2::new(20.0, 10.0));
    }
}

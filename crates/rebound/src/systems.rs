//! # Systems — Motion, Bounce, Draw
//!
//! ```text
//! system      kind            reads                     writes
//! ─────────── ─────────────── ───────────────────────── ──────────────────
//! movement    Transform       Velocity                  Position
//! bounce      Speed           Position, Rectangle       Position, Velocity
//! draw_rect   Graphics:Rect   Position                  DrawList
//! ```
//!
//! `movement` is registered before `bounce`, so a rectangle first moves past
//! the wall and is then clamped back onto it in the same frame. The overshoot
//! is visible to nothing but the bounce check.
//!
//! The physics lives in [`advance`] and [`reflect`]; the systems only fetch
//! components, call them, and write the results back.

use crate::ecs::{EcsError, EntityId, Position, Tick, Velocity, World};
use crate::math::Vec2;
use crate::render::DrawList;

/// Move a position by `velocity × elapsed` on both axes.
pub fn advance(position: Position, velocity: Velocity, elapsed: f32) -> Position {
    (position.as_vec2() + velocity.as_vec2() * elapsed).into()
}

/// Keep a box of size `extent` at `position` inside `[0, bounds]`, flipping
/// the velocity on every axis that was clamped.
///
/// Each axis is checked on its own, upper bound first, then lower bound.
pub fn reflect(position: Position, velocity: Velocity, extent: Vec2, bounds: Vec2) -> (Position, Velocity) {
    let (x, vx) = reflect_axis(position.x, velocity.x, extent.x, bounds.x);
    let (y, vy) = reflect_axis(position.y, velocity.y, extent.y, bounds.y);
    (Position::new(x, y), Velocity::new(vx, vy))
}

fn reflect_axis(mut pos: f32, mut vel: f32, extent: f32, bound: f32) -> (f32, f32) {
    if pos > bound - extent {
        pos = bound - extent;
        vel = -vel;
    }
    if pos < 0.0 {
        pos = 0.0;
        vel = -vel;
    }
    (pos, vel)
}

/// Update system for `Transform`: integrate the entity's velocity.
pub fn movement(world: &mut World, entity: &EntityId, tick: &Tick) -> Result<(), EcsError> {
    let velocity = *world.velocity(entity)?;
    let position = world.position_mut(entity)?;
    *position = advance(*position, velocity, tick.elapsed);
    Ok(())
}

/// Update system for `Speed`: bounce the entity off the window edges.
pub fn bounce(world: &mut World, entity: &EntityId, tick: &Tick) -> Result<(), EcsError> {
    let velocity = *world.velocity(entity)?;
    let position = *world.position(entity)?;
    let extent = world.rectangle(entity)?.extent();

    let (position, velocity) = reflect(position, velocity, extent, tick.screen.as_vec2());

    *world.position_mut(entity)? = position;
    *world.velocity_mut(entity)? = velocity;
    Ok(())
}

/// Render system for `Graphics:Rect`: draw the rectangle at its entity's
/// position.
///
/// Offset and position are truncated to whole pixels separately before they
/// are added, the same as the integer draw primitive they feed.
pub fn draw_rect(world: &World, entity: &EntityId, draw: &mut DrawList) -> Result<(), EcsError> {
    let rect = world.rectangle(entity)?;
    let position = world.position(entity)?;

    draw.fill_rect(
        rect.offset_x as i32 + position.x as i32,
        rect.offset_y as i32 + position.y as i32,
        rect.width as i32,
        rect.height as i32,
        rect.color,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::ecs::{ComponentKind, Rectangle};
    use crate::math::ScreenSize;
    use crate::render::FillRect;
    use approx::assert_relative_eq;

    const SCREEN: ScreenSize = ScreenSize::new(800, 450);

    fn tick(elapsed: f32) -> Tick {
        Tick {
            elapsed,
            screen: SCREEN,
        }
    }

    fn world_with(position: Position, velocity: Velocity, rect: Rectangle) -> (World, EntityId) {
        let mut world = World::new();
        let id = world
            .spawn("1")
            .insert(position)
            .insert(velocity)
            .insert(rect)
            .finish()
            .unwrap();
        (world, id)
    }

    fn square() -> Rectangle {
        Rectangle::new(20.0, 20.0, Color::BLUE)
    }

    #[test]
    fn advance_scales_velocity_by_elapsed() {
        let p = advance(Position::new(1.5, -2.0), Velocity::new(-60.0, 60.0), 0.016);
        assert_relative_eq!(p.x, 1.5 - 0.96, epsilon = 1e-5);
        assert_relative_eq!(p.y, -2.0 + 0.96, epsilon = 1e-5);
    }

    #[test]
    fn movement_free_flight() {
        let (mut world, id) = world_with(Position::new(10.0, 10.0), Velocity::new(80.0, 80.0), square());

        movement(&mut world, &id, &tick(1.0)).unwrap();
        assert_eq!(world.position(&id).unwrap(), &Position::new(90.0, 90.0));

        bounce(&mut world, &id, &tick(1.0)).unwrap();
        assert_eq!(world.position(&id).unwrap(), &Position::new(90.0, 90.0));
        assert_eq!(world.velocity(&id).unwrap(), &Velocity::new(80.0, 80.0));
    }

    #[test]
    fn right_wall_clamps_and_flips_x() {
        let (mut world, id) = world_with(Position::new(790.0, 10.0), Velocity::new(80.0, 80.0), square());

        movement(&mut world, &id, &tick(1.0)).unwrap();
        assert_eq!(world.position(&id).unwrap(), &Position::new(870.0, 90.0));

        bounce(&mut world, &id, &tick(1.0)).unwrap();
        assert_eq!(world.position(&id).unwrap(), &Position::new(780.0, 90.0));
        assert_eq!(world.velocity(&id).unwrap(), &Velocity::new(-80.0, 80.0));
    }

    #[test]
    fn bottom_wall_clamps_and_flips_y() {
        let (p, v) = reflect(
            Position::new(100.0, 445.0),
            Velocity::new(10.0, 65.0),
            Vec2::new(25.0, 10.0),
            SCREEN.as_vec2(),
        );
        assert_eq!(p, Position::new(100.0, 440.0));
        assert_eq!(v, Velocity::new(10.0, -65.0));
    }

    #[test]
    fn zero_bound_clamps_and_flips() {
        let (p, v) = reflect(
            Position::new(-4.0, -0.5),
            Velocity::new(-60.0, -65.0),
            Vec2::new(20.0, 20.0),
            SCREEN.as_vec2(),
        );
        assert_eq!(p, Position::new(0.0, 0.0));
        assert_eq!(v, Velocity::new(60.0, 65.0));
    }

    #[test]
    fn corner_hit_flips_both_axes() {
        let (p, v) = reflect(
            Position::new(795.0, 440.0),
            Velocity::new(80.0, 80.0),
            Vec2::new(20.0, 20.0),
            SCREEN.as_vec2(),
        );
        assert_eq!(p, Position::new(780.0, 430.0));
        assert_eq!(v, Velocity::new(-80.0, -80.0));
    }

    #[test]
    fn touching_the_wall_is_not_a_hit() {
        let (p, v) = reflect(
            Position::new(780.0, 0.0),
            Velocity::new(80.0, -80.0),
            Vec2::new(20.0, 20.0),
            SCREEN.as_vec2(),
        );
        assert_eq!(p, Position::new(780.0, 0.0));
        assert_eq!(v, Velocity::new(80.0, -80.0));
    }

    #[test]
    fn second_bounce_is_a_no_op() {
        let (mut world, id) = world_with(Position::new(870.0, -3.0), Velocity::new(80.0, -80.0), square());

        bounce(&mut world, &id, &tick(0.016)).unwrap();
        let position = *world.position(&id).unwrap();
        let velocity = *world.velocity(&id).unwrap();
        assert_eq!(position, Position::new(780.0, 0.0));
        assert_eq!(velocity, Velocity::new(-80.0, 80.0));

        bounce(&mut world, &id, &tick(0.016)).unwrap();
        assert_eq!(world.position(&id).unwrap(), &position);
        assert_eq!(world.velocity(&id).unwrap(), &velocity);
    }

    #[test]
    fn bounce_ignores_elapsed() {
        let (mut a, id) = world_with(Position::new(870.0, 90.0), Velocity::new(80.0, 80.0), square());
        let (mut b, _) = world_with(Position::new(870.0, 90.0), Velocity::new(80.0, 80.0), square());
        bounce(&mut a, &id, &tick(0.0)).unwrap();
        bounce(&mut b, &id, &tick(5.0)).unwrap();
        assert_eq!(a.position(&id).unwrap(), b.position(&id).unwrap());
        assert_eq!(a.velocity(&id).unwrap(), b.velocity(&id).unwrap());
    }

    #[test]
    fn bounce_without_rectangle_fails() {
        let mut world = World::new();
        world.insert("1", Position::new(900.0, 0.0)).unwrap();
        world.insert("1", Velocity::new(80.0, 0.0)).unwrap();
        let id = EntityId::new("1");

        let err = bounce(&mut world, &id, &tick(1.0)).unwrap_err();
        assert_eq!(
            err,
            EcsError::MissingComponent {
                entity: id.clone(),
                kind: ComponentKind::GraphicsRect,
            }
        );
        // Nothing was written before the lookup failed.
        assert_eq!(world.position(&id).unwrap(), &Position::new(900.0, 0.0));
    }

    #[test]
    fn movement_without_velocity_fails() {
        let mut world = World::new();
        world.insert("ghost", Position::new(0.0, 0.0)).unwrap();
        let err = movement(&mut world, &EntityId::new("ghost"), &tick(1.0)).unwrap_err();
        assert!(matches!(
            err,
            EcsError::MissingComponent {
                kind: ComponentKind::Speed,
                ..
            }
        ));
    }

    #[test]
    fn draw_rect_truncates_offset_and_position_separately() {
        let rect = Rectangle::new(25.9, 10.0, Color::RED).offset(1.9, -0.5);
        let (world, id) = world_with(Position::new(10.7, 20.2), Velocity::default(), rect);

        let mut draw = DrawList::new(Color::BLACK);
        draw_rect(&world, &id, &mut draw).unwrap();
        assert_eq!(
            draw.commands(),
            &[FillRect {
                x: 11,
                y: 20,
                width: 25,
                height: 10,
                color: Color::RED,
            }]
        );
    }

    #[test]
    fn draw_rect_leaves_components_untouched() {
        let (world, id) = world_with(Position::new(10.0, 10.0), Velocity::new(80.0, 80.0), square());
        let before: Vec<_> = ComponentKind::ALL.iter().map(|k| world.get(*k).to_vec()).collect();

        let mut draw = DrawList::new(Color::BLACK);
        draw_rect(&world, &id, &mut draw).unwrap();

        let after: Vec<_> = ComponentKind::ALL.iter().map(|k| world.get(*k).to_vec()).collect();
        assert_eq!(before, after);
        assert_eq!(draw.len(), 1);
    }
}

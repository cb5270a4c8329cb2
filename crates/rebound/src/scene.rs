//! The demo scene: three rectangles and the systems that move them.
//!
//! Initial positions of the second and third rectangle hang off the screen
//! size, so the scene is populated after the window exists.

use crate::color::Color;
use crate::ecs::{ComponentKind, EcsError, Position, Rectangle, Schedule, Velocity, World};
use crate::math::ScreenSize;
use crate::systems;

/// Populate `world` with the demo entities and register their systems.
///
/// This is the startup function the binary hands to
/// [`Game::setup`](crate::game::Game::setup).
pub fn populate(world: &mut World, schedule: &mut Schedule, screen: ScreenSize) -> Result<(), EcsError> {
    spawn_rectangles(world, screen)?;
    register_systems(schedule);
    log::debug!(
        "scene ready: {} rectangles, kinds {:?}, update systems {:?}, render systems {:?}",
        world.len(ComponentKind::GraphicsRect),
        world.kinds().map(ComponentKind::name).collect::<Vec<_>>(),
        schedule.update_names(),
        schedule.render_names(),
    );
    Ok(())
}

/// The three bouncing rectangles.
pub fn spawn_rectangles(world: &mut World, screen: ScreenSize) -> Result<(), EcsError> {
    let size = screen.as_vec2();

    world
        .spawn("1")
        .insert(Position::new(10.0, 10.0))
        .insert(Velocity::new(80.0, 80.0))
        .insert(Rectangle::new(20.0, 20.0, Color::BLUE))
        .finish()?;

    world
        .spawn("2")
        .insert(Position::new(size.x - 20.0, 15.0))
        .insert(Velocity::new(-60.0, 60.0))
        .insert(Rectangle::new(25.0, 10.0, Color::RED))
        .finish()?;

    world
        .spawn("3")
        .insert(Position::new(28.0, size.y - 150.0))
        .insert(Velocity::new(-80.0, -65.0))
        .insert(Rectangle::new(20.0, 20.0, Color::LIME))
        .finish()?;

    Ok(())
}

/// Motion before bounce, then the single render system.
pub fn register_systems(schedule: &mut Schedule) {
    schedule
        .add_update(ComponentKind::Transform, systems::movement)
        .add_update(ComponentKind::Speed, systems::bounce)
        .add_render(ComponentKind::GraphicsRect, systems::draw_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityId;

    #[test]
    fn populate_builds_three_complete_entities() {
        let mut world = World::new();
        let mut schedule = Schedule::new();
        populate(&mut world, &mut schedule, ScreenSize::new(800, 450)).unwrap();

        for kind in ComponentKind::ALL {
            assert_eq!(world.len(kind), 3, "{kind}");
        }
        assert_eq!(world.kinds().collect::<Vec<_>>(), ComponentKind::ALL);
        let id = EntityId::new("2");
        assert_eq!(world.position(&id).unwrap(), &Position::new(780.0, 15.0));
        assert_eq!(world.rectangle(&id).unwrap().color, Color::RED);
        assert_eq!(
            world.position(&EntityId::new("3")).unwrap(),
            &Position::new(28.0, 300.0)
        );
    }

    #[test]
    fn systems_registered_in_order() {
        let mut schedule = Schedule::new();
        register_systems(&mut schedule);
        assert_eq!(schedule.update_names(), ["movement", "bounce"]);
        assert_eq!(schedule.render_names(), ["draw_rect"]);
    }

    #[test]
    fn populating_twice_is_rejected() {
        let mut world = World::new();
        spawn_rectangles(&mut world, ScreenSize::new(800, 450)).unwrap();
        let err = spawn_rectangles(&mut world, ScreenSize::new(800, 450)).unwrap_err();
        assert!(matches!(err, EcsError::DuplicateComponent { .. }));
    }
}

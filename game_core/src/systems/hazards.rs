use hecs::World;

use crate::components::{Obstacle, Player};
use crate::config::Config;
use crate::resources::{Camera, Events};

/// Kill the player on any obstacle contact (screen-space boxes)
pub fn check_obstacles(world: &World, camera: &Camera, events: &mut Events) {
    let player_boxes: Vec<_> = world
        .query::<&Player>()
        .iter()
        .map(|(_e, player)| camera.to_screen(player.aabb()))
        .collect();

    for (_entity, obstacle) in world.query::<&Obstacle>().iter() {
        let obstacle_box = camera.to_screen(obstacle.aabb());
        if player_boxes.iter().any(|p| p.overlaps(&obstacle_box)) {
            events.died = true;
        }
    }
}

/// Kill the player once they drop below the visible field
pub fn check_fall(world: &World, camera: &Camera, events: &mut Events, config: &Config) {
    for (_entity, player) in world.query::<&Player>().iter() {
        if camera.screen_y(player.pos.y) > config.field_height {
            events.died = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_obstacle, create_player};
    use glam::Vec2;

    #[test]
    fn test_obstacle_contact_kills() {
        let mut world = World::new();
        let camera = Camera::new();
        let mut events = Events::new();
        create_player(&mut world, Vec2::new(400.0, 400.0));
        create_obstacle(&mut world, Vec2::new(410.0, 410.0));

        check_obstacles(&world, &camera, &mut events);
        assert!(events.died);
    }

    #[test]
    fn test_distant_obstacle_is_harmless() {
        let mut world = World::new();
        let camera = Camera::new();
        let mut events = Events::new();
        create_player(&mut world, Vec2::new(400.0, 400.0));
        create_obstacle(&mut world, Vec2::new(100.0, 100.0));

        check_obstacles(&world, &camera, &mut events);
        assert!(!events.died);
    }

    #[test]
    fn test_fall_below_view_kills() {
        let mut world = World::new();
        let camera = Camera::new();
        let mut events = Events::new();
        let config = Config::new();
        create_player(&mut world, Vec2::new(400.0, 601.0));

        check_fall(&world, &camera, &mut events, &config);
        assert!(events.died);
    }

    #[test]
    fn test_fall_check_is_screen_space() {
        let mut world = World::new();
        let mut camera = Camera::new();
        let mut events = Events::new();
        let config = Config::new();
        // World y 400 would be safe unscrolled, but the camera has climbed
        // 300 units, leaving the player at screen y 700.
        camera.y = -300.0;
        create_player(&mut world, Vec2::new(400.0, 400.0));

        check_fall(&world, &camera, &mut events, &config);
        assert!(events.died);

        events.clear();
        camera.y = 0.0;
        check_fall(&world, &camera, &mut events, &config);
        assert!(!events.died);
    }
}

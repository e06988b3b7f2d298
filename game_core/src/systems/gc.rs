use hecs::World;

use crate::components::{Coin, Obstacle};
use crate::config::Config;
use crate::resources::Camera;

/// Garbage collection: despawn coins and obstacles that scrolled below the
/// visible field, mirroring the platform pruning. The world only ever
/// scrolls downward, so nothing despawned here could come back into view.
pub fn gc(world: &mut World, camera: &Camera, config: &Config) {
    let mut to_remove = Vec::new();

    for (entity, coin) in world.query::<&Coin>().iter() {
        if camera.screen_y(coin.pos.y) > config.field_height {
            to_remove.push(entity);
        }
    }
    for (entity, obstacle) in world.query::<&Obstacle>().iter() {
        if camera.screen_y(obstacle.pos.y) > config.field_height {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_coin, create_obstacle};
    use glam::Vec2;

    #[test]
    fn test_sunken_spawns_are_collected() {
        let mut world = World::new();
        let mut camera = Camera::new();
        let config = Config::new();

        create_coin(&mut world, Vec2::new(400.0, 300.0));
        create_obstacle(&mut world, Vec2::new(200.0, 250.0));

        gc(&mut world, &camera, &config);
        assert_eq!(world.query::<&Coin>().iter().count(), 1);
        assert_eq!(world.query::<&Obstacle>().iter().count(), 1);

        camera.y = -400.0; // both now sit below screen y 600
        gc(&mut world, &camera, &config);
        assert_eq!(world.query::<&Coin>().iter().count(), 0);
        assert_eq!(world.query::<&Obstacle>().iter().count(), 0);
    }
}

use hecs::World;

use crate::components::Player;
use crate::config::Config;
use crate::resources::Camera;

/// Scroll the world down whenever the player reaches the upper margin.
///
/// Runs after `update_player` and before any screen-space collision check;
/// the offset moves in fixed steps, there is no smoothing.
pub fn update_camera(world: &World, camera: &mut Camera, config: &Config) {
    for (_entity, player) in world.query::<&Player>().iter() {
        if player.pos.y - camera.y <= config.camera_margin {
            camera.y -= config.camera_step;
        }
    }
}

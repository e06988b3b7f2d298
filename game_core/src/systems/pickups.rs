use hecs::World;

use crate::components::{Coin, Player};
use crate::config::Config;
use crate::resources::{Camera, Events, Progress};

/// Collect coins the player touches.
///
/// Both boxes are compared in screen space. Each collected coin is worth a
/// fixed score, bumps the coin counter and restarts the transient pickup
/// indicator.
pub fn collect_coins(
    world: &mut World,
    camera: &Camera,
    progress: &mut Progress,
    events: &mut Events,
    config: &Config,
) {
    let player_boxes: Vec<_> = world
        .query::<&Player>()
        .iter()
        .map(|(_e, player)| camera.to_screen(player.aabb()))
        .collect();

    let mut taken = Vec::new();
    for (entity, coin) in world.query::<&Coin>().iter() {
        let coin_box = camera.to_screen(coin.aabb());
        if player_boxes.iter().any(|p| p.overlaps(&coin_box)) {
            taken.push(entity);
        }
    }

    for entity in taken {
        let _ = world.despawn(entity);
        progress.score += config.coin_score;
        progress.coins += 1;
        progress.coin_flash = config.coin_flash_ticks;
        events.coin_taken = true;
    }
}

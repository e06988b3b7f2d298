use glam::Vec2;
use hecs::World;

use crate::components::{Coin, Obstacle};
use crate::config::{Config, Params};
use crate::field::{Platform, Terrain};
use crate::resources::{Camera, GameRng};

/// Extend the terrain upward once the newest platform has scrolled into view.
///
/// Each new platform lands 50-100 units above the previous one at a uniform
/// horizontal position, and may carry a coin and/or an obstacle spawned just
/// above its surface.
pub fn generate_platforms(
    world: &mut World,
    terrain: &mut Terrain,
    camera: &Camera,
    rng: &mut GameRng,
    config: &Config,
) {
    if camera.screen_y(terrain.newest().pos.y) <= 0.0 {
        return;
    }

    let x = rng.roll(config.platform_x_min, config.platform_x_max) as f32;
    let y = terrain.newest().pos.y - rng.roll(config.gap_min, config.gap_max) as f32;
    let platform = Platform::new(x, y);
    terrain.push(platform);

    maybe_spawn_coin(world, &platform, rng, config);
    maybe_spawn_obstacle(world, &platform, rng, config);
}

/// Drop the oldest platform once it has scrolled below the visible bottom
pub fn prune_platforms(terrain: &mut Terrain, camera: &Camera, config: &Config) {
    if camera.screen_y(terrain.oldest().pos.y) > config.field_height {
        terrain.pop_oldest();
    }
}

fn maybe_spawn_coin(world: &mut World, platform: &Platform, rng: &mut GameRng, config: &Config) {
    if !rng.chance(config.coin_chance) {
        return;
    }

    let px = platform.pos.x as i32;
    let x = rng.roll(px, px + config.spawn_span) as f32;
    let mut pos = Vec2::new(x, platform.pos.y - config.spawn_clearance);

    // Single retry: nudge upward once if the spot is taken. Two coins can
    // still end up overlapping; pickups handle that fine.
    let candidate = Coin::new(pos);
    let taken = world
        .query::<&Coin>()
        .iter()
        .any(|(_e, coin)| coin.aabb().overlaps(&candidate.aabb()));
    if taken {
        pos.y -= Params::COIN_NUDGE;
    }

    world.spawn((Coin::new(pos),));
}

fn maybe_spawn_obstacle(world: &mut World, platform: &Platform, rng: &mut GameRng, config: &Config) {
    if !rng.chance(config.obstacle_chance) {
        return;
    }

    let px = platform.pos.x as i32;
    let mut candidate = Obstacle::new(Vec2::new(
        rng.roll(px, px + config.spawn_span) as f32,
        platform.pos.y - config.spawn_clearance,
    ));

    // Re-roll from the full generation range until the spot is clear of
    // every existing obstacle; obstacles never overlap each other.
    loop {
        let blocked = world
            .query::<&Obstacle>()
            .iter()
            .any(|(_e, obstacle)| obstacle.aabb().overlaps(&candidate.aabb()));
        if !blocked {
            break;
        }
        candidate.pos = Vec2::new(
            rng.roll(config.platform_x_min, config.platform_x_max) as f32,
            platform.pos.y - rng.roll(config.gap_min, config.gap_max) as f32,
        );
    }

    world.spawn((candidate,));
}

pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod resources;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use resources::*;
pub use session::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one deterministic tick of the jumper simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    terrain: &mut Terrain,
    camera: &mut Camera,
    progress: &mut Progress,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
    config: &Config,
) {
    // Clear events and age the pickup indicator at the start of the tick
    events.clear();
    progress.decay_flash();

    // 1. Ingest input (apply to movement intents)
    ingest_inputs(world, input);

    // 2. Player physics: jump/gravity arc, run, screen wrap
    update_player(world, config);

    // 3. Scroll the view; must follow the player move and precede the
    //    screen-space collision checks
    update_camera(world, camera, config);

    // 4. Resolve platform landings
    check_landing(world, terrain, camera, events, config);

    // 5. Extend the terrain upward, prune it below
    generate_platforms(world, terrain, camera, rng, config);
    prune_platforms(terrain, camera, config);

    // 6. Coins, obstacles, falling off-world
    collect_coins(world, camera, progress, events, config);
    check_obstacles(world, camera, events);
    check_fall(world, camera, events, config);

    // 7. Survival scoring and level thresholds
    survival_tick(progress, config);
    update_level(progress, events, config);

    // 8. Drop spawns that scrolled away for good
    gc(world, camera, config);
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((Player::new(pos), MoveIntent::new()))
}

/// Helper to create a coin entity
pub fn create_coin(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((Coin::new(pos),))
}

/// Helper to create an obstacle entity
pub fn create_obstacle(world: &mut World, pos: Vec2) -> hecs::Entity {
    world.spawn((Obstacle::new(pos),))
}

use hecs::World;

use crate::components::MoveIntent;
use crate::resources::InputQueue;

/// Ingest queued input and update movement intents
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue) {
    let dir = input.take_dir();

    for (_entity, intent) in world.query_mut::<&mut MoveIntent>() {
        intent.dir = dir;
    }
}

use hecs::World;

use crate::{InputState, PaddleIntent};

/// Turn this frame's key state into the human paddle's intent
pub fn ingest_input(world: &mut World, input: &InputState) {
    let dir = input.direction();
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.dir = dir;
    }
}

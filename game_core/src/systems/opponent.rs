use hecs::World;

use crate::{AiController, Ball, Config, Paddle, RandomSource, Time};

/// Let every AI-driven paddle react to the ball's post-physics state
pub fn drive_ai(world: &mut World, config: &Config, time: &Time, rng: &mut dyn RandomSource) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball) {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    for (_entity, (paddle, ai)) in world.query_mut::<(&mut Paddle, &mut AiController)>() {
        ai.update(paddle, &ball, config, time.now_ms, rng);
    }
}

use hecs::World;

use crate::{Ball, Config, Events, Paddle, RandomSource, Score, ScoreDelta, Side};

/// Advance the ball one frame against both paddles and bank any goal
pub fn update_ball(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) -> ScoreDelta {
    // Copy paddles out first; the ball only reads them
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    let mut delta = ScoreDelta::NONE;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        delta = ball.update(left.as_ref(), right.as_ref(), config, rng, events);
        if events.ball_hit_paddle {
            tracing::trace!(speed = ball.speed, "ball hit paddle");
        }
    }

    score.apply(delta);
    delta
}

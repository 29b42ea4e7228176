use hecs::World;

use crate::{Config, Paddle, PaddleIntent};

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = f64::from(intent.dir) * paddle.speed;
            paddle.move_by(delta, config.field_height);
        }
    }
}

pub mod ai;
pub mod boundary;
pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use ai::*;
pub use boundary::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Ordering matters: the human paddle moves before the ball, and the AI
/// reacts to where the ball ended up after physics.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputState,
    rng: &mut dyn RandomSource,
) -> ScoreDelta {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest input (apply to paddle intents)
    ingest_input(world, input);

    // 2. Move the human paddle
    move_paddles(world, config);

    // 3. Move ball, bounce, score
    let delta = update_ball(world, config, score, events, rng);

    // 4. AI responds to the new ball state
    drive_ai(world, config, time, rng);

    delta
}

/// Helper to create a keyboard-driven paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::spawn(side, config), PaddleIntent::new()))
}

/// Helper to create an AI-driven paddle entity
pub fn create_ai_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::spawn(side, config), AiController::new(config)))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

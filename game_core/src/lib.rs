pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod serve;
pub mod systems;

pub use components::*;
pub use config::Config;
pub use params::*;
pub use resources::*;
pub use serve::serve_angle;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation
///
/// Input polling, paddle movement, ball motion and scoring run strictly in
/// sequence. When a scored event is raised the ball has already stopped for
/// the frame; the caller ends the round and builds a fresh world.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
) {
    // Clamp dt to prevent large jumps
    let step_time = Time {
        dt: time.dt.min(Params::MAX_DT),
        now: time.now,
    };

    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input_queue);

    // 2. Move paddles based on intents
    move_paddles(world, &step_time, config);

    // 3. Move ball, resolving wall/paddle reflections within the frame
    advance_ball(world, &step_time, config, events);

    // 4. Check scoring (ball exited the window)
    check_scoring(world, config, score, events);

    // Update time
    time.now += step_time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player_id: u8, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, angle: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, angle),))
}

use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, Score};

/// Check if the ball left the window (scoring)
///
/// The ball is left where it exited; the session tears the round down and
/// serves a fresh ball, so there is no further movement this frame.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.pos.x <= 0.0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;
        } else if ball.pos.x >= config.window_width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;
        }
    }
}

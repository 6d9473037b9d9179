use std::f32::consts::PI;

use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, Time};

/// Advance the ball one frame, resolving wall and paddle reflections
///
/// Motion is swept: the candidate position is checked before committing, and
/// a reflection re-tries the frame with the new angle so a bounce lands
/// in-bounds instead of waiting a frame. The retry loop is capped; a single
/// reflection changes the angle enough that the same boundary is not
/// re-crossed at normal speed/timestep magnitudes, and the cap keeps
/// pathological combinations from looping.
///
/// A candidate past the left or right edge commits as-is; `check_scoring`
/// ends the round from there.
pub fn advance_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    // Paddle x-spans are fixed per side; only y varies.
    let mut left_y = None;
    let mut right_y = None;
    for (_entity, paddle) in world.query_mut::<&Paddle>() {
        if paddle.player_id == 0 {
            left_y = Some(paddle.y);
        } else {
            right_y = Some(paddle.y);
        }
    }

    let left_edge = config.paddle_x(0) + config.paddle_width;
    let right_edge = config.paddle_x(1);
    let span = config.paddle_height;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut reflections = 0;
        loop {
            let next = ball.pos + ball.direction() * config.ball_velocity * time.dt;

            if reflections < config.ball_max_reflections {
                // Top/bottom bounce: reflect vertically, retry this frame
                if next.y <= 0.0 || next.y >= config.window_height {
                    ball.angle = -ball.angle;
                    events.ball_hit_wall = true;
                    reflections += 1;
                    continue;
                }

                // Paddle contact: the candidate x enters the paddle's span
                // while the ball is level with it. Clamp to the contact edge
                // and reflect horizontally.
                if let Some(py) = left_y {
                    if next.x <= left_edge && ball.pos.y >= py && ball.pos.y <= py + span {
                        ball.pos.x = left_edge;
                        ball.angle = PI - ball.angle;
                        events.ball_hit_paddle = true;
                        reflections += 1;
                        continue;
                    }
                }
                if let Some(py) = right_y {
                    if next.x >= right_edge && ball.pos.y >= py && ball.pos.y <= py + span {
                        ball.pos.x = right_edge;
                        ball.angle = PI - ball.angle;
                        events.ball_hit_paddle = true;
                        reflections += 1;
                        continue;
                    }
                }
            }

            ball.pos = next;
            break;
        }
    }
}

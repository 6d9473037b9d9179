use glam::Vec2;

use crate::params::Params;

/// Game configuration
///
/// One immutable struct passed into the loop, session and systems at
/// construction; nothing in the simulation reads process-wide globals.
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_velocity: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
    pub ball_velocity: f32,
    pub ball_max_reflections: u32,
    pub serve_offset_near: f32,
    pub serve_offset_far: f32,
    pub win_score: u8,
    pub tick_interval: f32,
    pub stall_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_velocity: Params::PADDLE_VELOCITY,
            paddle_offset: Params::PADDLE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_velocity: Params::BALL_VELOCITY,
            ball_max_reflections: Params::BALL_MAX_REFLECTIONS,
            serve_offset_near: Params::SERVE_OFFSET_NEAR,
            serve_offset_far: Params::SERVE_OFFSET_FAR,
            win_score: Params::WIN_SCORE,
            tick_interval: Params::TICK_INTERVAL,
            stall_factor: Params::STALL_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-edge X for a paddle based on player ID
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_offset
        } else {
            self.window_width - self.paddle_offset - self.paddle_width
        }
    }

    /// Clamp paddle top-left Y to the window
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.window_height - self.paddle_height)
    }

    /// Vertical-center spawn Y for a paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.window_height - self.paddle_height) / 2.0
    }

    /// Ball spawn position (window center)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    /// Lower bound of the serve cone, radians off horizontal
    pub fn serve_angle_min(&self) -> f32 {
        (self.serve_offset_near / self.window_width).atan()
    }

    /// Upper bound of the serve cone, radians off horizontal
    pub fn serve_angle_max(&self) -> f32 {
        (self.serve_offset_far / self.window_width).atan()
    }

    /// Delta-time threshold above which a tick is considered stalled
    pub fn stall_dt(&self) -> f32 {
        self.stall_factor * self.tick_interval
    }
}

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window (pixels, y grows downward)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_VELOCITY: f32 = 475.0; // pixels per second
    pub const PADDLE_OFFSET: f32 = 10.0; // gap between paddle and side edge

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_VELOCITY: f32 = 450.0;
    // A single frame resolves at most this many wall/paddle reflections;
    // at these speeds one reflection always clears the crossed boundary.
    pub const BALL_MAX_REFLECTIONS: u32 = 3;

    // Serve cone: vertical offsets at the far edge of the window, so the
    // band is [atan(near / width), atan(far / width)] radians off horizontal.
    pub const SERVE_OFFSET_NEAR: f32 = 50.0;
    pub const SERVE_OFFSET_FAR: f32 = 250.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Timing
    pub const TICK_INTERVAL: f32 = 0.01; // 10ms tick delay, ~100fps
    pub const STALL_FACTOR: f32 = 4.0; // skip ticks with dt > factor * interval
    pub const MAX_DT: f32 = 0.1; // clamp to prevent large jumps
}

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.01, now: 0.0 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0) // Left player wins
        } else if self.right >= win_score {
            Some(1) // Right player wins
        } else {
            None
        }
    }
}

/// Random number generator for serve angles
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// A point was scored this frame, ending the round
    pub fn round_over(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Per-tick snapshot of held movement keys
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(u8, i8)>, // (player_id, direction)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.inputs.push((player_id, dir));
    }
}

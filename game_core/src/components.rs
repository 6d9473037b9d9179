use glam::Vec2;

/// Paddle component - represents a player's paddle
///
/// `y` is the top-left corner; the fixed X per side comes from `Config`.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Ball component - the pong ball
///
/// Position is the ball center. Motion is angle-based: speed is a fixed
/// `Config` constant, the travel angle is in radians with positive `sin`
/// pointing up the screen (y decreases).
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub angle: f32,
}

impl Ball {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self { pos, angle }
    }

    /// Unit direction of travel in screen coordinates (y down)
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), -self.angle.sin())
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_ball_direction_screen_space() {
        let ball = Ball::new(Vec2::ZERO, 0.0);
        assert!((ball.direction().x - 1.0).abs() < 1e-6);
        assert!(ball.direction().y.abs() < 1e-6);

        // Positive angle travels up the screen (y decreases)
        let up_right = Ball::new(Vec2::ZERO, PI / 4.0);
        assert!(up_right.direction().x > 0.0);
        assert!(up_right.direction().y < 0.0);
    }
}

//! Local two-player match
//!
//! Owns the simulation world for the duration of a match. Each round gets a
//! fresh ball and freshly centered paddles; scores persist across rounds
//! until a side reaches the win score.

use game_core::{
    create_ball, create_paddle, serve_angle, step, Ball, Config, Events, GameRng, InputQueue,
    Paddle, Score, Time,
};
use glam::Vec2;
use hecs::World;

use crate::fsm::{MatchAction, MatchFsm, MatchPhase};

/// Snapshot of what the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub ball: Option<Vec2>,
    pub score_left: u8,
    pub score_right: u8,
}

pub struct LocalMatch {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    pub fsm: MatchFsm,
}

impl LocalMatch {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut session = Self {
            world: World::new(),
            time: Time::new(0.0, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            fsm: MatchFsm::new(),
        };
        session.spawn_round();
        session
    }

    pub fn phase(&self) -> MatchPhase {
        self.fsm.phase()
    }

    /// Winner (0 = left, 1 = right) once the match is over
    pub fn winner(&self) -> Option<u8> {
        self.score.has_winner(self.config.win_score)
    }

    /// Run one tick with the given held-key directions
    pub fn step(&mut self, dt: f32, left_dir: i8, right_dir: i8) {
        if self.fsm.phase() != MatchPhase::Playing {
            return;
        }

        self.input_queue.push_input(0, left_dir);
        self.input_queue.push_input(1, right_dir);
        self.time.dt = dt;

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
        );

        if self.events.round_over() {
            log::info!(
                "point for the {} player, score {} - {}",
                if self.events.left_scored { "left" } else { "right" },
                self.score.left,
                self.score.right
            );
            if self.winner().is_some() {
                self.fsm.transition(MatchAction::MatchWon);
            } else {
                self.fsm.transition(MatchAction::PointScored);
            }
        }
    }

    /// Restart after a point: fresh ball and paddles, same scores
    pub fn start_next_round(&mut self) {
        if !self.fsm.transition(MatchAction::ServeNext) {
            return;
        }
        self.spawn_round();
    }

    fn spawn_round(&mut self) {
        self.world.clear();
        let paddle_y = self.config.paddle_spawn_y();
        create_paddle(&mut self.world, 0, paddle_y);
        create_paddle(&mut self.world, 1, paddle_y);

        let angle = serve_angle(&self.config, &mut self.rng);
        create_ball(&mut self.world, self.config.ball_spawn(), angle);
    }

    /// Extract render state for this frame
    pub fn scene(&self) -> Scene {
        let mut paddle_left_y = self.config.paddle_spawn_y();
        let mut paddle_right_y = self.config.paddle_spawn_y();
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.player_id == 0 {
                paddle_left_y = paddle.y;
            } else {
                paddle_right_y = paddle.y;
            }
        }

        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_entity, ball)| ball.pos);

        Scene {
            paddle_left_y,
            paddle_right_y,
            ball,
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force_ball(session: &mut LocalMatch, pos: Vec2, angle: f32) {
        for (_entity, ball) in session.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.angle = angle;
        }
    }

    fn run_round_to_point(session: &mut LocalMatch) {
        // Straight right, level with neither paddle: the left player scores
        force_ball(session, Vec2::new(400.0, 100.0), 0.0);
        for _ in 0..200 {
            session.step(0.016, 0, 0);
            if session.phase() != MatchPhase::Playing {
                return;
            }
        }
        panic!("round did not finish");
    }

    #[test]
    fn test_new_match_spawns_round() {
        let session = LocalMatch::new(Config::new(), 1);
        let scene = session.scene();
        assert_eq!(scene.paddle_left_y, 262.5);
        assert_eq!(scene.paddle_right_y, 262.5);
        assert_eq!(scene.ball, Some(Vec2::new(400.0, 300.0)));
        assert_eq!(scene.score_left, 0);
        assert_eq!(scene.score_right, 0);
        assert_eq!(session.phase(), MatchPhase::Playing);
    }

    #[test]
    fn test_point_moves_match_to_round_over() {
        let mut session = LocalMatch::new(Config::new(), 2);
        run_round_to_point(&mut session);

        assert_eq!(session.phase(), MatchPhase::RoundOver);
        assert_eq!(session.score.left, 1);
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_next_round_resets_entities_keeps_score() {
        let mut session = LocalMatch::new(Config::new(), 3);
        run_round_to_point(&mut session);

        session.start_next_round();

        let scene = session.scene();
        assert_eq!(session.phase(), MatchPhase::Playing);
        assert_eq!(scene.paddle_left_y, 262.5);
        assert_eq!(scene.paddle_right_y, 262.5);
        assert_eq!(scene.ball, Some(Vec2::new(400.0, 300.0)));
        assert_eq!(scene.score_left, 1, "scores survive the round reset");
    }

    #[test]
    fn test_match_over_after_five_points() {
        let mut session = LocalMatch::new(Config::new(), 4);
        for round in 1..=5 {
            run_round_to_point(&mut session);
            if round < 5 {
                assert_eq!(session.phase(), MatchPhase::RoundOver);
                session.start_next_round();
            }
        }

        assert_eq!(session.phase(), MatchPhase::MatchOver);
        assert_eq!(session.winner(), Some(0));
        assert_eq!(session.score.left, 5);

        // Terminal: further stepping and restarting are no-ops
        session.start_next_round();
        assert_eq!(session.phase(), MatchPhase::MatchOver);
        session.step(0.016, 1, -1);
        assert_eq!(session.score.left, 5);
    }

    #[test]
    fn test_paddles_respond_to_directions() {
        let mut session = LocalMatch::new(Config::new(), 5);
        session.step(0.1, -1, 1);

        let scene = session.scene();
        assert!(scene.paddle_left_y < 262.5);
        assert!(scene.paddle_right_y > 262.5);
    }
}

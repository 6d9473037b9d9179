use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::Time;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let delta = intent.dir as f32 * config.paddle_velocity * time.dt;
            paddle.y = config.clamp_paddle_y(paddle.y + delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn paddle_y(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Paddle>(entity).unwrap().y
    }

    fn set_dir(world: &mut World, entity: hecs::Entity, dir: i8) {
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = dir;
    }

    #[test]
    fn test_paddle_moves_with_dt() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, 262.5);

        set_dir(&mut world, entity, 1);
        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        let expected = 262.5 + config.paddle_velocity * 0.1;
        assert!((paddle_y(&world, entity) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, 5.0);

        set_dir(&mut world, entity, -1);
        move_paddles(&mut world, &Time::new(1.0, 0.0), &config);

        assert_eq!(paddle_y(&world, entity), 0.0);
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 1, 500.0);

        set_dir(&mut world, entity, 1);
        move_paddles(&mut world, &Time::new(1.0, 0.0), &config);

        assert_eq!(
            paddle_y(&world, entity),
            config.window_height - config.paddle_height
        );
    }

    #[test]
    fn test_paddle_stays_in_bounds_for_any_dt() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, config.paddle_spawn_y());

        for i in 0..200 {
            let dt = (i % 17) as f32 * 0.013;
            set_dir(&mut world, entity, if i % 3 == 0 { -1 } else { 1 });
            move_paddles(&mut world, &Time::new(dt, 0.0), &config);

            let y = paddle_y(&world, entity);
            assert!(y >= 0.0);
            assert!(y <= config.window_height - config.paddle_height);
        }
    }

    #[test]
    fn test_paddle_idle_without_intent() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, 0, 262.5);

        move_paddles(&mut world, &Time::new(0.5, 0.0), &config);

        assert_eq!(paddle_y(&world, entity), 262.5);
    }
}

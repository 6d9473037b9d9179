use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::InputQueue;

/// Ingest the per-tick key snapshot into paddle movement intents
///
/// Intents default to stop; a queued entry overrides the matching paddle.
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = 0;
        for (player_id, dir) in &input_queue.inputs {
            if *player_id == paddle.player_id {
                intent.dir = *dir;
            }
        }
    }

    input_queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_inputs_become_intents() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 262.5);
        let right = create_paddle(&mut world, 1, 262.5);

        let mut queue = InputQueue::new();
        queue.push_input(0, -1);
        queue.push_input(1, 1);

        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
        assert!(queue.inputs.is_empty(), "queue is drained each tick");
    }

    #[test]
    fn test_missing_input_stops_paddle() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 262.5);

        let mut queue = InputQueue::new();
        queue.push_input(0, 1);
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 1);

        // No input next tick: the paddle stops
        ingest_inputs(&mut world, &mut queue);
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }
}

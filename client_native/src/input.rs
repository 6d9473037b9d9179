//! Keyboard input handling
//!
//! Tracks currently-held movement keys and folds them into a per-tick
//! direction for each paddle: W/S for the left player, the arrow keys for
//! the right player. Opposing keys held together cancel out.

use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left_up: bool,
    left_down: bool,
    right_up: bool,
    right_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: KeyCode, held: bool) {
        match key {
            KeyCode::KeyW => self.left_up = held,
            KeyCode::KeyS => self.left_down = held,
            KeyCode::ArrowUp => self.right_up = held,
            KeyCode::ArrowDown => self.right_down = held,
            _ => {}
        }
    }

    /// Movement direction for a paddle: -1 = up, 0 = stop, 1 = down
    pub fn dir(&self, player_id: u8) -> i8 {
        let (up, down) = if player_id == 0 {
            (self.left_up, self.left_down)
        } else {
            (self.right_up, self.right_down)
        };
        down as i8 - up as i8
    }
}

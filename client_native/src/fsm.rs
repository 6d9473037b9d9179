//! Game State Machine
//!
//! Tracks where a match is in its lifecycle. A round ends when a point is
//! scored; the match ends when a side reaches the win score.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Playing,
    RoundOver,
    MatchOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    PointScored,
    MatchWon,
    ServeNext,
}

/// Match state machine
pub struct MatchFsm {
    phase: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Playing,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; returns false and stays put if invalid
    pub fn transition(&mut self, action: MatchAction) -> bool {
        match self.next_phase(action) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    fn next_phase(&self, action: MatchAction) -> Option<MatchPhase> {
        use MatchAction::*;
        use MatchPhase::*;

        match (self.phase, action) {
            (Playing, PointScored) => Some(RoundOver),
            (Playing, MatchWon) => Some(MatchOver),
            (RoundOver, ServeNext) => Some(Playing),
            _ => None,
        }
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ends_round() {
        let mut fsm = MatchFsm::new();
        assert_eq!(fsm.phase(), MatchPhase::Playing);
        assert!(fsm.transition(MatchAction::PointScored));
        assert_eq!(fsm.phase(), MatchPhase::RoundOver);
    }

    #[test]
    fn test_round_restart_returns_to_playing() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::PointScored);
        assert!(fsm.transition(MatchAction::ServeNext));
        assert_eq!(fsm.phase(), MatchPhase::Playing);
    }

    #[test]
    fn test_win_ends_match() {
        let mut fsm = MatchFsm::new();
        assert!(fsm.transition(MatchAction::MatchWon));
        assert_eq!(fsm.phase(), MatchPhase::MatchOver);
    }

    #[test]
    fn test_match_over_is_terminal() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::MatchWon);
        assert!(!fsm.can_transition(MatchAction::ServeNext));
        assert!(!fsm.transition(MatchAction::PointScored));
        assert_eq!(fsm.phase(), MatchPhase::MatchOver);
    }

    #[test]
    fn test_invalid_transition_rejected() {
        let mut fsm = MatchFsm::new();
        assert!(!fsm.can_transition(MatchAction::ServeNext));
        assert!(!fsm.transition(MatchAction::ServeNext));
        assert_eq!(fsm.phase(), MatchPhase::Playing);
    }
}

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round has been played since the board was set up
    Fresh,
    /// The countdown is running
    Running,
    /// The countdown reached zero
    Over,
}

/// Complete state of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    pub remaining_seconds: u32,
    /// Hole the mole is in, `None` when there is no target
    pub active_cell: Option<usize>,
    /// Whether the current appearance already scored
    pub credited: bool,
    pub round_active: bool,
    pub round_just_ended: bool,
    pub grid_size: usize,
}

impl RoundState {
    /// Board before any round has started
    pub fn fresh(round_length_secs: u32, grid_size: usize) -> Self {
        Self {
            score: 0,
            remaining_seconds: round_length_secs,
            active_cell: None,
            credited: false,
            round_active: false,
            round_just_ended: false,
            grid_size,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.round_active {
            RoundPhase::Running
        } else if self.round_just_ended {
            RoundPhase::Over
        } else {
            RoundPhase::Fresh
        }
    }

    /// Check if a cell index is on the board
    pub fn is_in_bounds(&self, cell: usize) -> bool {
        cell < self.grid_size
    }

    /// Whether the mole should be drawn in `cell`
    ///
    /// A credited mole is hidden until it moves.
    pub fn is_mole_visible(&self, cell: usize) -> bool {
        self.active_cell == Some(cell) && !self.credited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = RoundState::fresh(30, 9);
        assert_eq!(state.score, 0);
        assert_eq!(state.remaining_seconds, 30);
        assert_eq!(state.active_cell, None);
        assert_eq!(state.phase(), RoundPhase::Fresh);
    }

    #[test]
    fn test_phase() {
        let mut state = RoundState::fresh(30, 9);
        state.round_active = true;
        assert_eq!(state.phase(), RoundPhase::Running);

        state.round_active = false;
        state.round_just_ended = true;
        assert_eq!(state.phase(), RoundPhase::Over);
    }

    #[test]
    fn test_bounds_checking() {
        let state = RoundState::fresh(30, 9);
        assert!(state.is_in_bounds(0));
        assert!(state.is_in_bounds(8));
        assert!(!state.is_in_bounds(9));
    }

    #[test]
    fn test_mole_visibility() {
        let mut state = RoundState::fresh(30, 9);
        state.active_cell = Some(4);
        assert!(state.is_mole_visible(4));
        assert!(!state.is_mole_visible(3));

        state.credited = true;
        assert!(!state.is_mole_visible(4));
    }
}

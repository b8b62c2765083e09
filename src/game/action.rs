/// Screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Game,
    Settings,
}

/// Action a player can take against the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tap a hole, by row-major index
    Whack(usize),
    /// Start a round, or restart the current one
    StartRound,
    OpenSettings,
    CloseSettings,
    /// Force the stored high score back to zero
    ResetHighScore,
}

impl Action {
    /// Screen on which this action makes sense
    pub fn screen(&self) -> Screen {
        match self {
            Action::Whack(_) | Action::StartRound | Action::OpenSettings => Screen::Game,
            Action::CloseSettings | Action::ResetHighScore => Screen::Settings,
        }
    }
}

/// Outcome of a whack attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhackOutcome {
    /// Scored a point; carries the new score
    Hit(u32),
    /// Wrong hole, or no such hole
    Miss,
    /// Right hole, but this appearance already scored
    AlreadyCredited,
    /// No round is running
    Inactive,
}

impl WhackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, WhackOutcome::Hit(_))
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info};

use super::ticker::run_periodic;
use crate::game::{Action, ClockTick, GameConfig, GameEngine, RoundState, Screen, WhackOutcome};
use crate::score::ScoreLedger;

/// Everything a front end needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub round: RoundState,
    pub high_score: u32,
    pub screen: Screen,
}

struct Inner {
    engine: GameEngine,
    round: RoundState,
    ledger: ScoreLedger,
    screen: Screen,
    /// Bumped on every start or abandon; stale tasks compare against it
    generation: u64,
}

impl Inner {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round.clone(),
            high_score: self.ledger.high_score(),
            screen: self.screen,
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<Snapshot>,
    /// Generation of the live round, `None` when no round is running
    gate: watch::Sender<Option<u64>>,
}

/// A running game: one board, one ledger, and the two round timers
///
/// Cloning is cheap and every clone drives the same game. Round state is
/// only touched under one lock, and the lock is never held across an
/// await, so updates from the timers and from the player are serialized.
#[derive(Clone)]
pub struct GameSession {
    shared: Arc<Shared>,
}

impl GameSession {
    pub fn new(engine: GameEngine, ledger: ScoreLedger) -> Self {
        let round = engine.fresh_state();
        let inner = Inner {
            engine,
            round,
            ledger,
            screen: Screen::Game,
            generation: 0,
        };
        let (updates, _) = watch::channel(inner.snapshot());
        let (gate, _) = watch::channel(None);

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                updates,
                gate,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.shared.updates.send_replace(inner.snapshot());
    }

    pub fn config(&self) -> GameConfig {
        self.lock().engine.config().clone()
    }

    /// Current state of the game
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Get notified after every change to the game
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.updates.subscribe()
    }

    /// Dispatch a player action
    ///
    /// Actions that belong to a screen the player isn't on are ignored.
    pub fn apply(&self, action: Action) {
        if action.screen() != self.snapshot().screen {
            debug!(?action, "ignoring action for another screen");
            return;
        }

        match action {
            Action::Whack(cell) => {
                self.whack(cell);
            }
            Action::StartRound => self.start_round(),
            Action::OpenSettings => self.open_settings(),
            Action::CloseSettings => self.close_settings(),
            Action::ResetHighScore => self.reset_high_score(),
        }
    }

    /// Start a round, replacing any round already running
    ///
    /// Spawns the clock and mole timers, so this must be called from inside
    /// a tokio runtime.
    pub fn start_round(&self) {
        let (generation, config) = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.round = inner.engine.start_round();
            self.shared.gate.send_replace(Some(inner.generation));
            self.publish(&inner);

            info!(
                generation = inner.generation,
                round_length = inner.round.remaining_seconds,
                first_cell = ?inner.round.active_cell,
                "round started"
            );
            (inner.generation, inner.engine.config().clone())
        };

        let clock = self.clone();
        tokio::spawn(run_periodic(
            config.clock_interval(),
            generation,
            self.shared.gate.subscribe(),
            move || clock.clock_tick(generation),
        ));

        let mover = self.clone();
        tokio::spawn(run_periodic(
            config.mole_interval(),
            generation,
            self.shared.gate.subscribe(),
            move || mover.mole_tick(generation),
        ));
    }

    /// One countdown tick; false once the timer should stop
    fn clock_tick(&self, generation: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }

        let Inner {
            engine,
            round,
            ledger,
            ..
        } = &mut *inner;

        match engine.tick_clock(round) {
            ClockTick::Idle => false,
            ClockTick::Counted { .. } => {
                self.publish(&inner);
                true
            }
            ClockTick::RoundOver { final_score } => {
                let new_best = ledger.record_round(final_score);
                self.shared.gate.send_replace(None);
                self.publish(&inner);
                info!(generation, final_score, new_best, "round over");
                false
            }
        }
    }

    /// One mole relocation; false once the timer should stop
    fn mole_tick(&self, generation: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }

        let Inner { engine, round, .. } = &mut *inner;
        match engine.relocate_mole(round) {
            Some(cell) => {
                debug!(cell, "mole moved");
                self.publish(&inner);
                true
            }
            None => false,
        }
    }

    /// Player tapped `cell`
    pub fn whack(&self, cell: usize) -> WhackOutcome {
        let mut inner = self.lock();
        let Inner { engine, round, .. } = &mut *inner;
        let outcome = engine.whack(round, cell);

        debug!(cell, ?outcome, "whack");
        if outcome.is_hit() {
            self.publish(&inner);
        }
        outcome
    }

    /// Switch to the settings screen
    ///
    /// A round still running is abandoned: the timers stop, the board goes
    /// back to fresh, and the score doesn't count toward the high score.
    pub fn open_settings(&self) {
        let mut inner = self.lock();
        if inner.round.round_active {
            info!(
                generation = inner.generation,
                score = inner.round.score,
                "round abandoned"
            );
            inner.generation += 1;
            self.shared.gate.send_replace(None);
        }

        inner.round = inner.engine.fresh_state();
        inner.screen = Screen::Settings;
        self.publish(&inner);
    }

    /// Back to the game screen, picking up the stored high score
    pub fn close_settings(&self) {
        let mut inner = self.lock();
        inner.ledger.reload();
        inner.screen = Screen::Game;
        self.publish(&inner);
    }

    pub fn reset_high_score(&self) {
        let mut inner = self.lock();
        inner.ledger.reset();
        self.publish(&inner);
    }
}

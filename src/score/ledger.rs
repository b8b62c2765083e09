use tracing::{info, warn};

use super::store::HighScoreStore;

/// Best score across rounds, backed by a store
///
/// Store failures are logged and swallowed: the cached value still moves,
/// so the current session shows the right number even when the disk
/// doesn't cooperate.
pub struct ScoreLedger {
    store: Box<dyn HighScoreStore>,
    high_score: u32,
}

impl ScoreLedger {
    /// Open a ledger, reading the current high score from `store`
    pub fn open(store: impl HighScoreStore + 'static) -> Self {
        let mut ledger = Self {
            store: Box::new(store),
            high_score: 0,
        };
        ledger.reload();
        ledger
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Re-read the high score from the store
    pub fn reload(&mut self) -> u32 {
        match self.store.load() {
            Ok(value) => self.high_score = value,
            Err(err) => warn!(error = %err, "failed to load high score, keeping {}", self.high_score),
        }
        self.high_score
    }

    /// Account for a finished round
    ///
    /// Returns true if `final_score` beat the previous best.
    pub fn record_round(&mut self, final_score: u32) -> bool {
        if final_score <= self.high_score {
            return false;
        }

        info!(previous = self.high_score, new = final_score, "new high score");
        self.high_score = final_score;
        if let Err(err) = self.store.save(final_score) {
            warn!(error = %err, "failed to save high score");
        }
        true
    }

    /// Force the high score back to zero
    pub fn reset(&mut self) {
        info!(previous = self.high_score, "resetting high score");
        self.high_score = 0;
        if let Err(err) = self.store.reset() {
            warn!(error = %err, "failed to reset high score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::store::{FileStore, MemoryStore};
    use anyhow::{Result, bail};
    use tempfile::TempDir;

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load(&self) -> Result<u32> {
            bail!("disk on fire")
        }

        fn save(&mut self, _value: u32) -> Result<()> {
            bail!("disk on fire")
        }
    }

    #[test]
    fn test_high_score_tracking() {
        let mut ledger = ScoreLedger::open(MemoryStore::new());

        assert!(ledger.record_round(10));
        assert_eq!(ledger.high_score(), 10);

        assert!(!ledger.record_round(5));
        assert_eq!(ledger.high_score(), 10); // Should not decrease

        assert!(!ledger.record_round(10));
        assert!(ledger.record_round(15));
        assert_eq!(ledger.high_score(), 15);
    }

    #[test]
    fn test_zero_round_leaves_empty_store_alone() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ScoreLedger::open(FileStore::in_dir(dir.path()));

        assert!(!ledger.record_round(0));
        assert_eq!(ledger.high_score(), 0);
        assert!(!dir.path().join("wack_a_mole_prefs.json").exists());
    }

    #[test]
    fn test_new_best_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ScoreLedger::open(FileStore::in_dir(dir.path()));

        ledger.record_round(5);

        assert_eq!(FileStore::in_dir(dir.path()).load().unwrap(), 5);
    }

    #[test]
    fn test_open_reads_existing_value() {
        let ledger = ScoreLedger::open(MemoryStore::with_value(21));
        assert_eq!(ledger.high_score(), 21);
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        store.save(30).unwrap();

        let mut ledger = ScoreLedger::open(store);
        ledger.reset();

        assert_eq!(ledger.high_score(), 0);
        assert_eq!(FileStore::in_dir(dir.path()).load().unwrap(), 0);
    }

    #[test]
    fn test_reload_sees_outside_changes() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ScoreLedger::open(FileStore::in_dir(dir.path()));
        assert_eq!(ledger.high_score(), 0);

        FileStore::in_dir(dir.path()).save(8).unwrap();
        assert_eq!(ledger.reload(), 8);
    }

    #[test]
    fn test_store_failures_do_not_stop_play() {
        let mut ledger = ScoreLedger::open(BrokenStore);
        assert_eq!(ledger.high_score(), 0);

        assert!(ledger.record_round(4));
        assert_eq!(ledger.high_score(), 4);

        ledger.reset();
        assert_eq!(ledger.high_score(), 0);
    }
}

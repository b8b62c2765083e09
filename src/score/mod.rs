pub mod ledger;
pub mod store;

pub use ledger::ScoreLedger;
pub use store::{FileStore, HighScoreStore, MemoryStore, PREFS_NAMESPACE};

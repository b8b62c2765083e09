//! High score persistence
//!
//! The high score lives in one small JSON record per namespace:
//! `<dir>/wack_a_mole_prefs.json` holding `{"high_score": N}`. Writes go
//! through a temp file in the same directory and an atomic rename, so a
//! crash mid-write leaves the previous value in place.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Namespace of the record on disk
pub const PREFS_NAMESPACE: &str = "wack_a_mole_prefs";

/// Somewhere a high score can be kept between runs
pub trait HighScoreStore: Send {
    /// Last saved value, or 0 if nothing was ever saved
    fn load(&self) -> Result<u32>;

    /// Overwrite the saved value
    fn save(&mut self, value: u32) -> Result<()>;

    /// Force the saved value back to zero
    fn reset(&mut self) -> Result<()> {
        self.save(0)
    }
}

/// The record as written to disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub high_score: u32,
}

/// High score kept in a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the record under `dir`, using the default namespace
    pub fn in_dir(dir: &Path) -> Self {
        Self::at(dir.join(format!("{PREFS_NAMESPACE}.json")))
    }

    /// Store the record at an exact path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_prefs(&self) -> Result<Prefs> {
        if !self.path.exists() {
            return Ok(Prefs::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read high score from {:?}", self.path))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse high score record {:?}", self.path))
    }

    fn write_prefs(&self, prefs: &Prefs) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {:?}", dir))?;

        let json = serde_json::to_string_pretty(prefs).context("Failed to serialize high score")?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temp file in {:?}", dir))?;
        tmp.write_all(json.as_bytes())
            .context("Failed to write high score")?;
        tmp.as_file()
            .sync_all()
            .context("Failed to flush high score")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;

        Ok(())
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<u32> {
        Ok(self.read_prefs()?.high_score)
    }

    fn save(&mut self, value: u32) -> Result<()> {
        self.write_prefs(&Prefs { high_score: value })
    }
}

/// High score kept only for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value`
    pub fn with_value(value: u32) -> Self {
        Self { value: Some(value) }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, value: u32) -> Result<()> {
        self.value = Some(value);
        Ok(())
    }
}

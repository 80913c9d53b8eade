//! Score storage: an append-only list of `{playerName, points}` records.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// One submitted score.
///
/// Field names on disk match the browser build's local storage layout, so
/// an exported `scores` array can be dropped in as the score file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub points: u32,
}

impl ScoreEntry {
    pub fn new(player_name: impl Into<String>, points: u32) -> Self {
        Self {
            player_name: player_name.into(),
            points,
        }
    }
}

/// Persistent score collection.
pub trait ScoreStore {
    /// All stored entries in submission order.
    fn load(&self) -> Result<Vec<ScoreEntry>, ScoreError>;

    /// Add one entry.
    fn append(&mut self, entry: ScoreEntry) -> Result<(), ScoreError>;
}

/// Scores kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(self.entries.clone())
    }

    fn append(&mut self, entry: ScoreEntry) -> Result<(), ScoreError> {
        self.entries.push(entry);
        Ok(())
    }
}

/// Scores kept as a JSON array in a file.
///
/// A missing file reads as an empty list. Every append rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> ScoreError {
        ScoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_all(&self, entries: &[ScoreEntry]) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no score file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Vec<ScoreEntry> =
            serde_json::from_str(&content).map_err(|source| ScoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            "loaded {} score(s) from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    fn append(&mut self, entry: ScoreEntry) -> Result<(), ScoreError> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.write_all(&entries)?;
        info!(
            "saved score, {} entries in {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Highest `limit` entries, best first. Ties keep submission order.
pub fn top_scores(mut entries: Vec<ScoreEntry>, limit: usize) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries.truncate(limit);
    entries
}

/// Record a finished game's score under `name`.
///
/// Only allowed once the game is over and with a name that is not blank.
/// The name is stored as typed.
pub fn submit_score(
    store: &mut impl ScoreStore,
    game_over: bool,
    points: u32,
    name: &str,
) -> Result<ScoreEntry, ScoreError> {
    if !game_over {
        warn!("score submission rejected: game in progress");
        return Err(ScoreError::GameInProgress);
    }
    if name.trim().is_empty() {
        warn!("score submission rejected: blank name");
        return Err(ScoreError::BlankName);
    }

    let entry = ScoreEntry::new(name, points);
    store.append(entry.clone())?;
    Ok(entry)
}

//! High-score persistence
//!
//! Best score per difficulty, stored as a small JSON file. A missing or
//! unreadable file reads as all zeros; writes only happen when a round
//! beats the stored score.

use crate::core::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default score file, created in the working directory
pub const DEFAULT_SCORES_FILE: &str = "hangman_scores.json";

/// Best score achieved at each difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl ScoreRecord {
    /// Best score stored for a difficulty
    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    const fn entry_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// File-backed score store
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the score record
    ///
    /// Never fails the caller: a missing, unreadable, or malformed file
    /// yields the all-zero record, and missing keys default to zero.
    #[must_use]
    pub fn load(&self) -> ScoreRecord {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persist `candidate` for `difficulty` if it beats the stored score
    ///
    /// Returns whether an update occurred. Equal scores are not rewritten.
    ///
    /// # Errors
    /// Returns an I/O error if the improved record cannot be written.
    pub fn save(&self, difficulty: Difficulty, candidate: u32) -> io::Result<bool> {
        let mut record = self.load();
        if candidate <= record.get(difficulty) {
            return Ok(false);
        }

        *record.entry_mut(difficulty) = candidate;
        let json = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
        fs::write(&self.path, json)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempStore {
        store: ScoreStore,
    }

    impl TempStore {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "gallows_scores_{}_{name}.json",
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self {
                store: ScoreStore::new(path),
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(self.store.path());
        }
    }

    #[test]
    fn load_missing_file_yields_zeros() {
        let temp = TempStore::new("missing");
        assert_eq!(temp.store.load(), ScoreRecord::default());
    }

    #[test]
    fn load_corrupt_file_yields_zeros() {
        let temp = TempStore::new("corrupt");
        fs::write(temp.store.path(), "{ not json ]").unwrap();

        assert_eq!(temp.store.load(), ScoreRecord::default());
    }

    #[test]
    fn load_partial_record_defaults_missing_keys() {
        let temp = TempStore::new("partial");
        fs::write(temp.store.path(), r#"{"medium": 80}"#).unwrap();

        let record = temp.store.load();
        assert_eq!(record.easy, 0);
        assert_eq!(record.medium, 80);
        assert_eq!(record.hard, 0);
    }

    #[test]
    fn save_only_overwrites_strictly_greater() {
        let temp = TempStore::new("monotonic");

        assert!(temp.store.save(Difficulty::Easy, 40).unwrap());
        assert!(!temp.store.save(Difficulty::Easy, 30).unwrap());
        assert_eq!(temp.store.load().easy, 40);

        assert!(temp.store.save(Difficulty::Easy, 50).unwrap());
        assert_eq!(temp.store.load().easy, 50);
    }

    #[test]
    fn save_equal_score_is_not_an_update() {
        let temp = TempStore::new("equal");

        assert!(temp.store.save(Difficulty::Hard, 90).unwrap());
        assert!(!temp.store.save(Difficulty::Hard, 90).unwrap());
    }

    #[test]
    fn save_keeps_other_difficulties() {
        let temp = TempStore::new("isolated");

        temp.store.save(Difficulty::Easy, 40).unwrap();
        temp.store.save(Difficulty::Hard, 120).unwrap();

        let record = temp.store.load();
        assert_eq!(record.easy, 40);
        assert_eq!(record.medium, 0);
        assert_eq!(record.hard, 120);
    }

    #[test]
    fn record_get_matches_fields() {
        let record = ScoreRecord {
            easy: 1,
            medium: 2,
            hard: 3,
        };
        assert_eq!(record.get(Difficulty::Easy), 1);
        assert_eq!(record.get(Difficulty::Medium), 2);
        assert_eq!(record.get(Difficulty::Hard), 3);
    }
}

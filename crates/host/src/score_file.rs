//! High score persisted as plain decimal text.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::HighScoreStore;
use crate::types::MAX_SCORE;

/// Reads and overwrites a single-number file such as `<pref_dir>/hs.txt`.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    type Error = anyhow::Error;

    /// A missing file is a first run and reads as 0. Unreadable or non-numeric
    /// contents are errors; values above the cap are clamped.
    fn load(&mut self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no high score at {}, starting from 0", self.path.display());
                return Ok(0);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read high score {}", self.path.display()))
            }
        };

        let value: u64 = text.trim().parse().with_context(|| {
            format!(
                "corrupt high score {}: {:?} is not a number",
                self.path.display(),
                text.trim()
            )
        })?;

        if value > MAX_SCORE as u64 {
            log::warn!("high score {} above cap, clamping to {}", value, MAX_SCORE);
            return Ok(MAX_SCORE);
        }
        log::info!("loaded high score {} from {}", value, self.path.display());
        Ok(value as u32)
    }

    fn save(&mut self, value: u32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&self.path, value.to_string())
            .with_context(|| format!("failed to write high score {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_zero() {
        let dir = TempDir::new().unwrap();
        let mut store = FileHighScoreStore::new(dir.path().join("hs.txt"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_overwrites_and_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("hs.txt");
        let mut store = FileHighScoreStore::new(&path);

        store.save(1234).unwrap();
        store.save(7).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "7");
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "  42\n").unwrap();
        assert_eq!(FileHighScoreStore::new(&path).load().unwrap(), 42);
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "lots").unwrap();
        let err = FileHighScoreStore::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("corrupt high score"));
    }

    #[test]
    fn oversized_value_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "999999999").unwrap();
        assert_eq!(FileHighScoreStore::new(&path).load().unwrap(), MAX_SCORE);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be.
        let mut store = FileHighScoreStore::new(dir.path());
        assert!(store.load().is_err());
    }
}

//! Startup configuration from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::SeedSource;
use crate::types::{DifficultyLevel, DifficultyProfile};

pub const ENV_DIFFICULTY: &str = "BBLOCK_DIFFICULTY";
pub const ENV_PREF_DIR: &str = "BBLOCK_PREF_DIR";
pub const ENV_SOUND: &str = "BBLOCK_SOUND";
pub const ENV_INVINCIBLE: &str = "BBLOCK_INVINCIBLE";
pub const ENV_SEED: &str = "BBLOCK_SEED";
pub const ENV_LOG_PATH: &str = "BBLOCK_LOG_PATH";

const HIGH_SCORE_FILE: &str = "hs.txt";

/// Game configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub difficulty: DifficultyLevel,
    /// Directory holding the high score file.
    pub pref_dir: PathBuf,
    pub sound: bool,
    pub invincible: bool,
    /// Fixed spawn seed; a fresh one per session when unset.
    pub seed: Option<u64>,
    /// Log file. Logging is disabled when unset (the terminal belongs to the game).
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::default(),
            pref_dir: PathBuf::from("."),
            sound: true,
            invincible: false,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    ///
    /// Unset and blank values fall back to defaults; malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let difficulty = match get(ENV_DIFFICULTY) {
            None => DifficultyLevel::default(),
            Some(raw) => parse_difficulty(&raw)?,
        };

        let pref_dir = get(ENV_PREF_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_pref_dir(&get));

        let sound = match get(ENV_SOUND) {
            None => true,
            Some(raw) => parse_flag(ENV_SOUND, &raw)?,
        };

        let invincible = match get(ENV_INVINCIBLE) {
            None => false,
            Some(raw) => parse_flag(ENV_INVINCIBLE, &raw)?,
        };

        let seed = get(ENV_SEED)
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("{}={:?} is not a valid seed", ENV_SEED, raw))
            })
            .transpose()?;

        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);

        Ok(Self {
            difficulty,
            pref_dir,
            sound,
            invincible,
            seed,
            log_path,
        })
    }

    pub fn profile(&self) -> DifficultyProfile {
        DifficultyProfile::for_level(self.difficulty)
    }

    pub fn high_score_path(&self) -> PathBuf {
        self.pref_dir.join(HIGH_SCORE_FILE)
    }

    pub fn seed_source(&self) -> SeedSource {
        match self.seed {
            Some(seed) => SeedSource::Fixed(seed),
            None => SeedSource::Entropy,
        }
    }
}

fn parse_difficulty(raw: &str) -> Result<DifficultyLevel> {
    let n: i64 = raw
        .parse()
        .with_context(|| format!("{}={:?} is not a number", ENV_DIFFICULTY, raw))?;
    u8::try_from(n)
        .ok()
        .and_then(DifficultyLevel::new)
        .ok_or_else(|| {
            anyhow!(
                "Invalid difficulty: {} (expected {}-{})",
                n,
                DifficultyLevel::MIN,
                DifficultyLevel::MAX
            )
        })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{}={:?} is not a boolean", key, raw),
    }
}

fn default_pref_dir<F>(get: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(data) = get("XDG_DATA_HOME") {
        return PathBuf::from(data).join("bblock");
    }
    if let Some(home) = get("HOME") {
        return PathBuf::from(home).join(".local").join("share").join("bblock");
    }
    PathBuf::from(".")
}

//! CLI settings file.
//!
//! A small optional TOML file supplies run defaults; command-line flags
//! override it. A missing file falls back to built-in defaults, a present
//! but malformed file is an error.

use crate::Result;
use serde::Deserialize;
use std::path::Path;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Run defaults loaded from `lossquant.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of Monte Carlo trials.
    pub trials: usize,
    /// Optional seed; unset means non-deterministic runs.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from the given path, or defaults if it is absent.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load("does-not-exist.toml").unwrap();
        assert_eq!(settings.trials, DEFAULT_TRIALS);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = toml::from_str("seed = 42").unwrap();
        assert_eq!(settings.trials, DEFAULT_TRIALS);
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn test_full_settings() {
        let settings: Settings = toml::from_str("trials = 50000\nseed = 7").unwrap();
        assert_eq!(settings.trials, 50_000);
        assert_eq!(settings.seed, Some(7));
    }
}

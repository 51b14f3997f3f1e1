//! Replay configuration from environment variables.

use anyhow::{bail, Result};

use crate::types::{DEFAULT_BOARD_SIZE, INITIAL_TILES, MAX_PIECE};

/// Replay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub size: usize,
    pub seed: u32,
    /// Winning tile value
    pub max_piece: u32,
    pub initial_tiles: usize,
    /// Append JSONL step records here when set
    pub log_path: Option<String>,
    /// Keep applying moves after the game is over
    pub keep_playing: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: 1,
            max_piece: MAX_PIECE,
            initial_tiles: INITIAL_TILES,
            log_path: None,
            keep_playing: false,
        }
    }
}

impl ReplayConfig {
    /// Create from environment variables
    ///
    /// - `TWENTY48_SIZE`: board edge length (default: 4)
    /// - `TWENTY48_SEED`: spawner seed (default: 1)
    /// - `TWENTY48_TARGET`: winning tile value (default: 2048)
    /// - `TWENTY48_INITIAL_TILES`: tiles on the opening board (default: 2)
    /// - `TWENTY48_LOG_PATH`: JSONL log file (default: none)
    /// - `TWENTY48_KEEP_PLAYING`: "1" or "true" to ignore game over
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ReplayConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let size = lookup("TWENTY48_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);

        let seed = lookup("TWENTY48_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_piece = lookup("TWENTY48_TARGET")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_piece);

        let initial_tiles = lookup("TWENTY48_INITIAL_TILES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.initial_tiles);

        let log_path = lookup("TWENTY48_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let keep_playing = lookup("TWENTY48_KEEP_PLAYING")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            size,
            seed,
            max_piece,
            initial_tiles,
            log_path,
            keep_playing,
        }
    }

    /// Reject configurations the engine cannot play
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("board size must be at least 1");
        }
        if self.max_piece < 4 || !self.max_piece.is_power_of_two() {
            bail!(
                "winning tile must be a power of two of at least 4, got {}",
                self.max_piece
            );
        }
        if self.initial_tiles > self.size * self.size {
            bail!(
                "{} initial tiles do not fit on a {}x{} board",
                self.initial_tiles,
                self.size,
                self.size
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ReplayConfig::from_lookup(|_| None);
        assert_eq!(config, ReplayConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ReplayConfig::from_lookup(lookup_from(&[
            ("TWENTY48_SIZE", "5"),
            ("TWENTY48_SEED", "99"),
            ("TWENTY48_TARGET", "512"),
            ("TWENTY48_INITIAL_TILES", "3"),
            ("TWENTY48_LOG_PATH", " /tmp/replay.jsonl "),
            ("TWENTY48_KEEP_PLAYING", "TRUE"),
        ]));
        assert_eq!(config.size, 5);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_piece, 512);
        assert_eq!(config.initial_tiles, 3);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/replay.jsonl"));
        assert!(config.keep_playing);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let config = ReplayConfig::from_lookup(lookup_from(&[
            ("TWENTY48_SIZE", "big"),
            ("TWENTY48_SEED", "-1"),
            ("TWENTY48_LOG_PATH", "   "),
            ("TWENTY48_KEEP_PLAYING", "yes"),
        ]));
        assert_eq!(config, ReplayConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = ReplayConfig {
            size: 0,
            ..ReplayConfig::default()
        };
        assert!(zero.validate().is_err());

        let odd_target = ReplayConfig {
            max_piece: 1000,
            ..ReplayConfig::default()
        };
        let err = odd_target.validate().unwrap_err();
        assert!(err.to_string().contains("power of two"));

        let crowded = ReplayConfig {
            size: 2,
            initial_tiles: 5,
            ..ReplayConfig::default()
        };
        assert!(crowded.validate().is_err());
    }
}

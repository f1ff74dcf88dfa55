// src/config.rs
use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

// --- Constants ---
pub const DEFAULT_WHITE_NAME: &str = "White";
pub const DEFAULT_BLACK_NAME: &str = "Black";
pub const DEFAULT_RECORD_FILENAME: &str = "chess_game.json";

pub const WHITE_NAME_VAR: &str = "CHESS_WHITE";
pub const BLACK_NAME_VAR: &str = "CHESS_BLACK";
pub const RECORD_FILE_VAR: &str = "CHESS_RECORD_FILE";
pub const SEED_VAR: &str = "CHESS_SEED";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub white_name: String,
    pub black_name: String,
    pub record_path: PathBuf,
    /// Seed for the `auto` command; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            white_name: DEFAULT_WHITE_NAME.to_string(),
            black_name: DEFAULT_BLACK_NAME.to_string(),
            record_path: PathBuf::from(DEFAULT_RECORD_FILENAME),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(name) = get(WHITE_NAME_VAR) { config.white_name = name; }
        if let Some(name) = get(BLACK_NAME_VAR) { config.black_name = name; }
        if let Some(path) = get(RECORD_FILE_VAR) { config.record_path = PathBuf::from(path); }
        if let Some(raw) = get(SEED_VAR) {
            let seed = raw.parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue { key: SEED_VAR, value: raw.clone() })?;
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => write!(f, "Invalid value for {}: '{}'", key, value),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(Config::from_lookup(|_| None), Ok(Config::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (WHITE_NAME_VAR, "Alice"),
            (BLACK_NAME_VAR, " Bob "),
            (RECORD_FILE_VAR, "out/game.json"),
            (SEED_VAR, "42"),
        ])).unwrap();
        assert_eq!(config.white_name, "Alice");
        assert_eq!(config.black_name, "Bob");
        assert_eq!(config.record_path, PathBuf::from("out/game.json"));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[(WHITE_NAME_VAR, "   ")])).unwrap();
        assert_eq!(config.white_name, DEFAULT_WHITE_NAME);
    }

    #[test]
    fn bad_seed_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[(SEED_VAR, "abc")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue { key: SEED_VAR, value: "abc".to_string() });
    }
}

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::output::OutputConfig;

pub mod dictionary;
pub mod output;

pub use output::WriteMode;

const DEFAULT_INPUT_PATH: &str = "inputwords";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list, one word per line
    pub input_path: PathBuf,
    pub dictionary: DictionaryConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            dictionary: DictionaryConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, `LEXIS_*` keys as in the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup("LEXIS_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));

        Config {
            input_path,
            dictionary: DictionaryConfig::from_lookup(&lookup),
            output: OutputConfig::from_lookup(&lookup),
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parse an optional setting, keeping `default` when the value is invalid
pub(crate) fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => match raw.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Ignoring {key}={raw}: {e}");
                default
            }
        },
        None => default,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

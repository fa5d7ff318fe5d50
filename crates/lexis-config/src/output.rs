use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use lexis_core::{OutputFormat, ParseEnumError};
use serde::{Deserialize, Serialize};

use crate::parse_or;

const DEFAULT_OUTPUT_PATH: &str = "outputdictionary";

/// What happens to an existing output file at the start of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate once before the first word is written
    #[default]
    Overwrite,
    /// Keep existing content; repeated runs accumulate
    Append,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Overwrite => f.write_str("overwrite"),
            WriteMode::Append => f.write_str("append"),
        }
    }
}

impl FromStr for WriteMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" | "truncate" => Ok(WriteMode::Overwrite),
            "append" => Ok(WriteMode::Append),
            _ => Err(ParseEnumError::unknown("write mode", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub mode: WriteMode,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode: WriteMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl OutputConfig {
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("LEXIS_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Self {
            path,
            mode: parse_or("LEXIS_OUTPUT_MODE", lookup("LEXIS_OUTPUT_MODE"), WriteMode::default()),
            format: parse_or(
                "LEXIS_OUTPUT_FORMAT",
                lookup("LEXIS_OUTPUT_FORMAT"),
                OutputFormat::default(),
            ),
        }
    }
}

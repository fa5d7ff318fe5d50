use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::RelatedWordSet;
use crate::error::ParseEnumError;

/// Line layout of the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One related word per line, multi-word lemmas space-separated
    #[default]
    Flat,
    /// One `[a, b, c]` line per stem, lemmas as stored
    Bracketed,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Flat => f.write_str("flat"),
            OutputFormat::Bracketed => f.write_str("bracketed"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "lines" => Ok(OutputFormat::Flat),
            "bracketed" | "list" => Ok(OutputFormat::Bracketed),
            _ => Err(ParseEnumError::unknown("output format", s)),
        }
    }
}

pub struct Serializer {
    format: OutputFormat,
}

impl Serializer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the output lines for one word, without line terminators
    pub fn render_lines(&self, set: &RelatedWordSet) -> Vec<String> {
        match self.format {
            OutputFormat::Flat => set
                .iter()
                .flat_map(|(_, lemmas)| lemmas.iter())
                .map(|lemma| lemma.replace('_', " "))
                .filter(|word| !word.trim().is_empty())
                .collect(),
            OutputFormat::Bracketed => set
                .iter()
                .filter(|(_, lemmas)| !lemmas.is_empty())
                .map(|(_, lemmas)| {
                    let joined: Vec<&str> = lemmas.iter().map(String::as_str).collect();
                    format!("[{}]", joined.join(", "))
                })
                .collect(),
        }
    }

    /// Write one word's lines to `out`, returning the number of lines written
    pub fn write<W: Write>(&self, set: &RelatedWordSet, out: &mut W) -> io::Result<usize> {
        let lines = self.render_lines(set);
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(lines.len())
    }
}

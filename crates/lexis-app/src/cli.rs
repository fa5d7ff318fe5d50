use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lexis_config::{Config, WriteMode};
use lexis_core::{OutputFormat, Relation};

/// Expand a word list with related words from a WordNet database
#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
pub struct Args {
    /// Word list, one word per line [default: inputwords]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file [default: outputdictionary]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// WordNet `dict` directory [default: dict]
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// overwrite | append
    #[arg(long)]
    pub mode: Option<WriteMode>,

    /// flat | bracketed
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Relations to follow besides synonyms, e.g. `hypernym,hyponym`
    #[arg(long, value_delimiter = ',', conflicts_with = "synonyms_only")]
    pub relations: Option<Vec<Relation>>,

    /// Collect synonyms only
    #[arg(long)]
    pub synonyms_only: bool,

    /// JSON config file; replaces LEXIS_* environment settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(dict) = &self.dict {
            config.dictionary.path = dict.clone();
        }
        if let Some(mode) = self.mode {
            config.output.mode = mode;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(relations) = &self.relations {
            config.dictionary.relations = relations.clone();
        }
        if self.synonyms_only {
            config.dictionary.relations.clear();
        }
    }

    /// Log filter forced by flags, `None` to defer to `RUST_LOG`
    pub fn log_filter(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

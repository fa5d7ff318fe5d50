use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lexis_core::{IndexEntry, LoadError, PartOfSpeech};

use crate::dictionary::{WordNet, index_key};
use crate::parse::{detect_version, is_header_line, parse_exception_line, parse_index_line};

pub struct WordNetLoader;

impl WordNetLoader {
    /// Load a WordNet database from its `dict` directory
    ///
    /// `index.<pos>` and `data.<pos>` are required for all four parts of
    /// speech; `<pos>.exc` exception lists are optional.
    pub fn load_from_dir(path: &Path) -> Result<WordNet, LoadError> {
        tracing::info!("Loading WordNet from {}", path.display());

        if !path.is_dir() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let mut version = None;
        let mut indexes = HashMap::new();
        let mut data = HashMap::new();
        let mut exceptions = HashMap::new();

        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();

            let index_text = read_text(&path.join(format!("index.{suffix}")))?;
            if version.is_none() {
                version = detect_version(index_text.lines());
            }
            let index = parse_index(&index_text, pos);
            tracing::debug!("Loaded {} index entries for {}", index.len(), pos);
            indexes.insert(pos, index);

            let data_path = path.join(format!("data.{suffix}"));
            data.insert(pos, read_bytes(&data_path)?);

            let exc_path = path.join(format!("{suffix}.exc"));
            if exc_path.is_file() {
                let list = parse_exceptions(&read_text(&exc_path)?);
                tracing::debug!("Loaded {} exceptions for {}", list.len(), pos);
                exceptions.insert(pos, list);
            } else {
                tracing::debug!("No exception list at {}", exc_path.display());
            }
        }

        let wordnet = WordNet {
            version: version.unwrap_or_else(|| "unknown".to_string()),
            indexes,
            data,
            exceptions,
        };
        tracing::info!(
            "Loaded WordNet {} with {} index entries",
            wordnet.version(),
            wordnet.entry_count()
        );
        Ok(wordnet)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read(path)?)
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn parse_index(text: &str, pos: PartOfSpeech) -> HashMap<String, IndexEntry> {
    let mut index = HashMap::new();

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() || is_header_line(line) {
            continue;
        }
        match parse_index_line(line) {
            Ok(entry) if entry.pos == pos => {
                index.insert(index_key(&entry.lemma), entry);
            }
            Ok(entry) => {
                tracing::warn!(
                    "Skipping index.{} line {}: {} entry in {} index",
                    pos.file_suffix(),
                    number + 1,
                    entry.pos,
                    pos
                );
            }
            Err(e) => {
                tracing::warn!("Skipping index.{} line {}: {}", pos.file_suffix(), number + 1, e);
            }
        }
    }

    index
}

fn parse_exceptions(text: &str) -> HashMap<String, Vec<String>> {
    let mut exceptions: HashMap<String, Vec<String>> = HashMap::new();

    for line in text.lines() {
        if let Some((inflected, bases)) = parse_exception_line(line) {
            let entry = exceptions.entry(index_key(&inflected)).or_default();
            for base in bases {
                if !entry.contains(&base) {
                    entry.push(base);
                }
            }
        }
    }

    exceptions
}

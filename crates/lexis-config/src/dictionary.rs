use std::path::PathBuf;

use lexis_core::Relation;
use serde::{Deserialize, Serialize};

const DEFAULT_DICT_DIR: &str = "dict";

fn default_relations() -> Vec<Relation> {
    vec![Relation::Hypernym, Relation::Hyponym]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding the WordNet database files
    pub path: PathBuf,
    /// Relations followed from every sense besides synonyms
    #[serde(default = "default_relations")]
    pub relations: Vec<Relation>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICT_DIR),
            relations: default_relations(),
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("LEXIS_DICT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICT_DIR));

        let relations = match lookup("LEXIS_RELATIONS") {
            Some(raw) => Relation::parse_list(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring LEXIS_RELATIONS={raw}: {e}");
                default_relations()
            }),
            None => default_relations(),
        };

        Self { path, relations }
    }
}

use std::collections::HashMap;

use lexis_core::{
    DictionaryMetadata, IndexEntry, LexicalDictionary, LookupError, PartOfSpeech, Synset, SynsetId,
};

use crate::parse::parse_data_line;

/// WordNet database opened from its `dict` directory
///
/// Index and exception lists are parsed up front. Data files are kept as
/// raw bytes because index entries address synset records by byte offset;
/// records are parsed on demand.
pub struct WordNet {
    pub(crate) version: String,
    pub(crate) indexes: HashMap<PartOfSpeech, HashMap<String, IndexEntry>>,
    pub(crate) data: HashMap<PartOfSpeech, Vec<u8>>,
    pub(crate) exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

/// Index key form of a lemma: lowercase, words joined with `_`
pub fn index_key(lemma: &str) -> String {
    lemma
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

impl WordNet {
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of index entries across all parts of speech
    pub fn entry_count(&self) -> usize {
        self.indexes.values().map(HashMap::len).sum()
    }

    pub fn contains(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.index_entry(lemma, pos).is_some()
    }

    /// Base forms listed for an irregular inflection in `<pos>.exc`
    pub fn exception_bases(&self, word: &str, pos: PartOfSpeech) -> Option<&[String]> {
        self.exceptions
            .get(&pos)?
            .get(&index_key(word))
            .map(Vec::as_slice)
    }

    fn record(&self, id: SynsetId) -> Option<&[u8]> {
        let bytes = self.data.get(&id.pos)?;
        let start = usize::try_from(id.offset).ok()?;
        if start >= bytes.len() {
            return None;
        }
        // offsets must land on the start of a line
        if start > 0 && bytes[start - 1] != b'\n' {
            return None;
        }
        let rest = &bytes[start..];
        let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

impl LexicalDictionary for WordNet {
    fn index_entry(&self, lemma: &str, pos: PartOfSpeech) -> Option<&IndexEntry> {
        self.indexes.get(&pos)?.get(&index_key(lemma))
    }

    fn synset(&self, id: SynsetId) -> Result<Synset, LookupError> {
        let record = self.record(id).ok_or(LookupError::SynsetNotFound(id))?;
        let line = String::from_utf8_lossy(record);

        let synset = parse_data_line(line.trim_end_matches('\r')).map_err(|e| {
            LookupError::MalformedRecord {
                id,
                reason: e.to_string(),
            }
        })?;

        if synset.id != id {
            return Err(LookupError::MalformedRecord {
                id,
                reason: format!("record is {}", synset.id),
            });
        }

        Ok(synset)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "WordNet".to_string(),
            version: self.version.clone(),
            language: "en".to_string(),
            entry_count: self.entry_count(),
        }
    }
}

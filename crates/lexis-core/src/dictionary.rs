use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, ParseEnumError};

/// Read-only access to a lexical database
pub trait LexicalDictionary: Send + Sync {
    /// Index entry for a lemma in one grammatical category, `None` on a miss
    fn index_entry(&self, lemma: &str, pos: PartOfSpeech) -> Option<&IndexEntry>;

    /// Resolve a sense identifier to its synonym set
    fn synset(&self, id: SynsetId) -> Result<Synset, LookupError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;

    /// Synsets one semantic hop away from `id` through `relation`
    fn related_synsets(&self, id: SynsetId, relation: Relation) -> Result<Vec<SynsetId>, LookupError> {
        Ok(self.synset(id)?.related(relation).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter tag used inside the database files
    pub fn tag(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parse a database tag. Adjective satellites (`s`) fold into adjectives.
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' | 's' => Some(PartOfSpeech::Adjective),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Suffix of the `index.*` / `data.*` files and prefix of the `*.exc` file
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            _ => Err(ParseEnumError::unknown("part of speech", s)),
        }
    }
}

/// Sense identifier: byte offset of the synset record inside its data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SynsetId {
    pub pos: PartOfSpeech,
    pub offset: u64,
}

impl SynsetId {
    pub fn new(pos: PartOfSpeech, offset: u64) -> Self {
        Self { pos, offset }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SID-{:08}-{}", self.offset, self.pos.tag())
    }
}

/// Relation kinds the lookup can follow from a sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
}

impl Relation {
    /// Pointer symbol in the data files
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Hypernym => "@",
            Relation::InstanceHypernym => "@i",
            Relation::Hyponym => "~",
            Relation::InstanceHyponym => "~i",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Hypernym => "hypernym",
            Relation::InstanceHypernym => "instance_hypernym",
            Relation::Hyponym => "hyponym",
            Relation::InstanceHyponym => "instance_hyponym",
        }
    }

    /// Parse a comma-separated list such as `hypernym,hyponym`
    pub fn parse_list(s: &str) -> Result<Vec<Relation>, ParseEnumError> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hypernym" | "hypernyms" | "@" => Ok(Relation::Hypernym),
            "instance_hypernym" | "instance_hypernyms" | "@i" => Ok(Relation::InstanceHypernym),
            "hyponym" | "hyponyms" | "~" => Ok(Relation::Hyponym),
            "instance_hyponym" | "instance_hyponyms" | "~i" => Ok(Relation::InstanceHyponym),
            _ => Err(ParseEnumError::unknown("relation", s)),
        }
    }
}

/// One line of an `index.*` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub pointer_symbols: Vec<String>,
    pub tagged_sense_count: u32,
    /// Senses in frequency order
    pub synsets: Vec<SynsetId>,
}

/// Link from a synset (or one of its words) to another synset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    pub symbol: String,
    pub target: SynsetId,
    /// 1-based source word number, 0 for a synset-level pointer
    pub source: u8,
    /// 1-based target word number, 0 for a synset-level pointer
    pub target_word: u8,
}

impl Pointer {
    /// Synset-to-synset pointer, as opposed to a word-to-word one
    pub fn is_semantic(&self) -> bool {
        self.source == 0 && self.target_word == 0
    }
}

/// One record of a `data.*` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: SynsetId,
    pub lex_file: u8,
    /// Member lemmas as stored, multi-word lemmas joined with `_`
    pub lemmas: Vec<String>,
    pub pointers: Vec<Pointer>,
    pub gloss: String,
}

impl Synset {
    pub fn related(&self, relation: Relation) -> impl Iterator<Item = SynsetId> + '_ {
        let symbol = relation.symbol();
        self.pointers
            .iter()
            .filter(move |p| p.is_semantic() && p.symbol == symbol)
            .map(|p| p.target)
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

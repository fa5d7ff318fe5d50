use std::sync::Arc;

use lexis_core::{PartOfSpeech, Stemmer};

use crate::dictionary::{WordNet, index_key};

/// Upper bound on recombined stems for one multi-word expression
const MAX_COLLOCATION_STEMS: usize = 256;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Ordered collection without duplicates
#[derive(Default)]
struct Stems(Vec<String>);

impl Stems {
    fn push(&mut self, stem: impl Into<String>) {
        let stem = stem.into();
        if !stem.is_empty() && !self.0.contains(&stem) {
            self.0.push(stem);
        }
    }
}

/// Apply the suffix detachment rules of `pos` to a single word
fn detach(word: &str, pos: PartOfSpeech) -> Vec<String> {
    let mut stems = Stems::default();
    for (suffix, ending) in detachment_rules(pos) {
        if word.len() > suffix.len() {
            if let Some(root) = word.strip_suffix(suffix) {
                stems.push(format!("{root}{ending}"));
            }
        }
    }
    stems.0
}

/// Rule-based candidates for a normalized word, not checked against the index
pub fn candidate_stems(word: &str, pos: PartOfSpeech) -> Vec<String> {
    let mut stems = Stems::default();

    if word.contains('_') && matches!(pos, PartOfSpeech::Noun | PartOfSpeech::Verb) {
        for stem in collocation_stems(word, pos) {
            stems.push(stem);
        }
    } else if pos == PartOfSpeech::Noun && word.len() > 3 && word.ends_with("ful") {
        // boxesful -> boxful
        let head = &word[..word.len() - 3];
        for stem in detach(head, pos) {
            stems.push(format!("{stem}ful"));
        }
    } else {
        for stem in detach(word, pos) {
            stems.push(stem);
        }
    }

    stems.0.retain(|stem| stem != word);
    stems.0
}

/// Stem every part of a `_`-joined expression and recombine the alternatives
fn collocation_stems(word: &str, pos: PartOfSpeech) -> Vec<String> {
    let mut combined = vec![String::new()];

    for part in word.split('_') {
        let mut alternatives = Stems::default();
        alternatives.push(part);
        for stem in detach(part, pos) {
            alternatives.push(stem);
        }
        if alternatives.0.is_empty() {
            // empty part from doubled separators
            alternatives.0.push(String::new());
        }

        let mut next = Vec::with_capacity(combined.len() * alternatives.0.len());
        'outer: for prefix in &combined {
            for alternative in &alternatives.0 {
                if next.len() >= MAX_COLLOCATION_STEMS {
                    break 'outer;
                }
                if prefix.is_empty() {
                    next.push(alternative.clone());
                } else {
                    next.push(format!("{prefix}_{alternative}"));
                }
            }
        }
        combined = next;
    }

    combined
}

/// WordNet morphological stemmer
///
/// Exception lists win over rules: when a word is a listed irregular form
/// only its listed bases (and the word itself, if indexed) are returned.
/// Otherwise rule candidates are filtered against the index; if none is
/// indexed the unfiltered candidates are returned.
pub struct WordNetStemmer {
    dictionary: Arc<WordNet>,
}

impl WordNetStemmer {
    pub fn new(dictionary: Arc<WordNet>) -> Self {
        Self { dictionary }
    }
}

impl Stemmer for WordNetStemmer {
    fn find_stems(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        let word = index_key(word);
        if word.is_empty() {
            return Vec::new();
        }

        let mut stems = Stems::default();

        let exception = self.dictionary.exception_bases(&word, pos);
        if let Some(bases) = exception {
            for base in bases {
                stems.push(base.as_str());
            }
        }

        if self.dictionary.contains(&word, pos) {
            stems.push(word.as_str());
        }

        if exception.is_some() {
            return stems.0;
        }

        for candidate in candidate_stems(&word, pos) {
            if self.dictionary.contains(&candidate, pos) {
                stems.push(candidate);
            }
        }

        stems.0
    }
}

use crate::dictionary::{LexicalDictionary, PartOfSpeech};

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Normalize raw input (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Dictionary backing the lookups
    fn dictionary(&self) -> &dyn LexicalDictionary;

    /// Stemmer bound to the same dictionary
    fn stemmer(&self) -> &dyn Stemmer;
}

/// Reduce an inflected form to dictionary base forms
pub trait Stemmer: Send + Sync {
    /// Candidate stems of `word` in one grammatical category, in discovery
    /// order and without duplicates. Candidates are not guaranteed to be
    /// present in the index.
    fn find_stems(&self, word: &str, pos: PartOfSpeech) -> Vec<String>;
}

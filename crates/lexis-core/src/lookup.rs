use crate::aggregate::RelatedWordSet;
use crate::dictionary::{PartOfSpeech, Relation};
use crate::error::LookupError;
use crate::language::LanguageProcessor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    /// Relations followed one hop from every sense. Synonyms are always collected.
    pub relations: Vec<Relation>,
}

impl LookupOptions {
    pub fn synonyms_only() -> Self {
        Self {
            relations: Vec::new(),
        }
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            relations: vec![Relation::Hypernym, Relation::Hyponym],
        }
    }
}

/// Lookup-and-aggregate pass for single words against a shared processor
pub struct WordLookup<'a> {
    processor: &'a dyn LanguageProcessor,
    options: LookupOptions,
}

impl<'a> WordLookup<'a> {
    pub fn new(processor: &'a dyn LanguageProcessor, options: LookupOptions) -> Self {
        Self { processor, options }
    }

    /// Collect related lemmas for every stem of `word` across all parts of speech
    ///
    /// Stems missing from the index contribute nothing. An error means a
    /// sense could not be resolved and the whole word should be skipped.
    pub fn related_words(&self, word: &str) -> Result<RelatedWordSet, LookupError> {
        let mut set = RelatedWordSet::new();

        let word = self.processor.normalize(word);
        if word.is_empty() {
            return Ok(set);
        }

        let dictionary = self.processor.dictionary();
        let stemmer = self.processor.stemmer();

        for pos in PartOfSpeech::ALL {
            for stem in stemmer.find_stems(&word, pos) {
                let Some(entry) = dictionary.index_entry(&stem, pos) else {
                    tracing::trace!(%stem, %pos, "stem not in index");
                    continue;
                };

                for &sense in &entry.synsets {
                    set.extend(&stem, dictionary.synset(sense)?.lemmas);

                    for &relation in &self.options.relations {
                        for related in dictionary.related_synsets(sense, relation)? {
                            set.extend(&stem, dictionary.synset(related)?.lemmas);
                        }
                    }
                }

                tracing::trace!(%stem, %pos, senses = entry.synsets.len(), "stem resolved");
            }
        }

        tracing::debug!(
            word = %word,
            stems = set.len(),
            lemmas = set.lemma_count(),
            "lookup finished"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::dictionary::{
        DictionaryMetadata, IndexEntry, LexicalDictionary, Pointer, Synset, SynsetId,
    };
    use crate::language::Stemmer;

    struct MapDictionary {
        index: HashMap<(String, PartOfSpeech), IndexEntry>,
        synsets: HashMap<SynsetId, Synset>,
    }

    impl MapDictionary {
        fn new() -> Self {
            Self {
                index: HashMap::new(),
                synsets: HashMap::new(),
            }
        }

        fn add_synset(&mut self, id: SynsetId, lemmas: &[&str], pointers: &[(&str, SynsetId)]) {
            let synset = Synset {
                id,
                lex_file: 0,
                lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
                pointers: pointers
                    .iter()
                    .map(|(symbol, target)| Pointer {
                        symbol: symbol.to_string(),
                        target: *target,
                        source: 0,
                        target_word: 0,
                    })
                    .collect(),
                gloss: String::new(),
            };
            self.synsets.insert(id, synset);
        }

        fn add_index(&mut self, lemma: &str, pos: PartOfSpeech, synsets: &[SynsetId]) {
            self.index.insert(
                (lemma.to_string(), pos),
                IndexEntry {
                    lemma: lemma.to_string(),
                    pos,
                    pointer_symbols: vec![],
                    tagged_sense_count: 0,
                    synsets: synsets.to_vec(),
                },
            );
        }
    }

    impl LexicalDictionary for MapDictionary {
        fn index_entry(&self, lemma: &str, pos: PartOfSpeech) -> Option<&IndexEntry> {
            self.index.get(&(lemma.to_string(), pos))
        }

        fn synset(&self, id: SynsetId) -> Result<Synset, LookupError> {
            self.synsets
                .get(&id)
                .cloned()
                .ok_or(LookupError::SynsetNotFound(id))
        }

        fn metadata(&self) -> DictionaryMetadata {
            DictionaryMetadata {
                name: "map".to_string(),
                version: "test".to_string(),
                language: "en".to_string(),
                entry_count: self.index.len(),
            }
        }
    }

    /// Strips a trailing `s`, keeping the word itself as a candidate
    struct PluralStemmer;

    impl Stemmer for PluralStemmer {
        fn find_stems(&self, word: &str, _pos: PartOfSpeech) -> Vec<String> {
            let mut stems = vec![word.to_string()];
            if let Some(stripped) = word.strip_suffix('s') {
                stems.push(stripped.to_string());
            }
            stems
        }
    }

    struct TestProcessor {
        dictionary: MapDictionary,
    }

    impl LanguageProcessor for TestProcessor {
        fn language_code(&self) -> &str {
            "en"
        }

        fn normalize(&self, text: &str) -> String {
            text.trim().to_lowercase()
        }

        fn dictionary(&self) -> &dyn LexicalDictionary {
            &self.dictionary
        }

        fn stemmer(&self) -> &dyn Stemmer {
            &PluralStemmer
        }
    }

    fn noun(offset: u64) -> SynsetId {
        SynsetId::new(PartOfSpeech::Noun, offset)
    }

    fn verb(offset: u64) -> SynsetId {
        SynsetId::new(PartOfSpeech::Verb, offset)
    }

    fn processor() -> TestProcessor {
        let mut dictionary = MapDictionary::new();
        dictionary.add_synset(noun(10), &["dog", "domestic_dog"], &[("@", noun(20)), ("~", noun(30))]);
        dictionary.add_synset(noun(20), &["canine", "canid"], &[("~", noun(10))]);
        dictionary.add_synset(noun(30), &["poodle"], &[("@", noun(10))]);
        dictionary.add_synset(noun(40), &["frump", "dog"], &[]);
        dictionary.add_synset(verb(50), &["chase", "dog"], &[]);
        dictionary.add_index("dog", PartOfSpeech::Noun, &[noun(10), noun(40)]);
        dictionary.add_index("dog", PartOfSpeech::Verb, &[verb(50)]);
        dictionary.add_synset(noun(60), &["stray"], &[("@", noun(998))]);
        dictionary.add_index("broken", PartOfSpeech::Noun, &[noun(999)]);
        dictionary.add_index("stray", PartOfSpeech::Noun, &[noun(60)]);
        TestProcessor { dictionary }
    }

    fn lemmas(set: &RelatedWordSet, stem: &str) -> Vec<String> {
        set.get(stem).unwrap().iter().cloned().collect()
    }

    #[test]
    fn test_collects_synonyms_hypernyms_and_hyponyms() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::default());

        let set = lookup.related_words("dogs").unwrap();

        assert_eq!(set.stems().collect::<Vec<_>>(), vec!["dog"]);
        assert_eq!(
            lemmas(&set, "dog"),
            vec!["canid", "canine", "chase", "dog", "domestic_dog", "frump", "poodle"]
        );
    }

    #[test]
    fn test_synonyms_only() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::synonyms_only());

        let set = lookup.related_words("dog").unwrap();

        assert_eq!(
            lemmas(&set, "dog"),
            vec!["chase", "dog", "domestic_dog", "frump"]
        );
    }

    #[test]
    fn test_unknown_word_yields_empty_set() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::default());

        let set = lookup.related_words("xyzzy123").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.stems().count(), 0);
    }

    #[test]
    fn test_blank_word_yields_empty_set() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::default());

        assert!(lookup.related_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_dangling_sense_is_an_error() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::default());

        let err = lookup.related_words("broken").unwrap_err();
        assert!(matches!(err, LookupError::SynsetNotFound(id) if id == noun(999)));
    }

    #[test]
    fn test_dangling_relation_target_is_an_error() {
        let processor = processor();

        let err = WordLookup::new(&processor, LookupOptions::default())
            .related_words("stray")
            .unwrap_err();
        assert!(matches!(err, LookupError::SynsetNotFound(id) if id == noun(998)));

        let set = WordLookup::new(&processor, LookupOptions::synonyms_only())
            .related_words("stray")
            .unwrap();
        assert_eq!(lemmas(&set, "stray"), vec!["stray"]);
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let processor = processor();
        let lookup = WordLookup::new(&processor, LookupOptions::default());

        let first = lookup.related_words("Dogs").unwrap();
        let second = lookup.related_words("dogs").unwrap();
        assert_eq!(first, second);
    }
}

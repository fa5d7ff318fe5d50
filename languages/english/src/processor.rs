use std::path::Path;
use std::sync::Arc;

use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::{LanguageProcessor, LexicalDictionary, LoadError, Stemmer};

use crate::dictionary::WordNet;
use crate::loader::WordNetLoader;
use crate::stemmer::WordNetStemmer;

/// English language processor over one opened WordNet database
pub struct EnglishProcessor {
    dictionary: Arc<WordNet>,
    stemmer: WordNetStemmer,
}

impl EnglishProcessor {
    /// Open the WordNet database in `dict_dir`
    pub fn open(dict_dir: &Path) -> Result<Self, LoadError> {
        let dictionary = WordNetLoader::load_from_dir(dict_dir)?;
        Ok(Self::with_dictionary(Arc::new(dictionary)))
    }

    pub fn with_dictionary(dictionary: Arc<WordNet>) -> Self {
        Self {
            stemmer: WordNetStemmer::new(Arc::clone(&dictionary)),
            dictionary,
        }
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn dictionary(&self) -> &dyn LexicalDictionary {
        self.dictionary.as_ref()
    }

    fn stemmer(&self) -> &dyn Stemmer {
        &self.stemmer
    }
}

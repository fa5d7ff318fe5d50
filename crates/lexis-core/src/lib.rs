pub mod aggregate;
pub mod dictionary;
pub mod error;
pub mod language;
pub mod lookup;
pub mod preprocess;
pub mod serialize;

pub use aggregate::RelatedWordSet;
pub use dictionary::{
    DictionaryMetadata, IndexEntry, LexicalDictionary, PartOfSpeech, Pointer, Relation, Synset,
    SynsetId,
};
pub use error::{LoadError, LookupError, ParseEnumError};
pub use language::{LanguageProcessor, Stemmer};
pub use lookup::{LookupOptions, WordLookup};
pub use serialize::{OutputFormat, Serializer};

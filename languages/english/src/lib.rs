pub mod dictionary;
pub mod loader;
pub mod parse;
pub mod processor;
pub mod stemmer;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;

pub use dictionary::WordNet;
pub use loader::WordNetLoader;
pub use processor::EnglishProcessor;
pub use stemmer::WordNetStemmer;

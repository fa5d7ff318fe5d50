use crate::dictionary::SynsetId;

/// Failure to open or parse a lexical database
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failure while resolving senses of a single word
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Synset not found: {0}")]
    SynsetNotFound(SynsetId),

    #[error("Malformed record {id}: {reason}")]
    MalformedRecord { id: SynsetId, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEnumError {
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ParseEnumError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        ParseEnumError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

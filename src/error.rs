use thiserror::Error;

/// Errors surfaced by the stemmer itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StemError {
    #[error("Invalid input: cannot stem an empty word")]
    InvalidInput,
}

/// Errors raised while building or emitting a suffix table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Empty suffix in suffix list")]
    EmptySuffix,

    #[error("Unsupported character {ch:?} in suffix '{suffix}'")]
    UnsupportedChar { suffix: String, ch: char },

    #[error("Duplicate suffix: {0}")]
    DuplicateSuffix(String),

    #[error("Suffix table too large: {0} states")]
    TooManyStates(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, StemError>;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum WordRankError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Size too big: {size}")]
    Overflow { size: u128 },

    #[error("Walk limit of {limit} steps exceeded at index {index}")]
    WalkLimitExceeded { index: usize, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WordRankError>;

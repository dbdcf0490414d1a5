// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadingError {
    // Input errors
    #[error("Unsupported input kind: {kind}")]
    UnsupportedInputKind { kind: String },

    #[error("Malformed number literal '{literal}': {reason}")]
    MalformedLiteral { literal: String, reason: String },

    #[error("Number has {groups} digit groups but the magnitude table only covers {supported}")]
    MagnitudeOutOfRange { groups: usize, supported: usize },

    // Configuration errors
    #[error("Invalid reading config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ReadingError {
    fn from(e: serde_json::Error) -> Self {
        ReadingError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for ReadingError {
    fn from(e: bincode::Error) -> Self {
        ReadingError::Serialization(e.to_string())
    }
}

pub type ReadingResult<T> = Result<T, ReadingError>;

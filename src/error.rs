use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloragenError {
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Property '{0}' is already registered")]
    DuplicateProperty(String),

    #[error("Genome kind '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Genome kind mismatch: '{left}' vs '{right}'")]
    KindMismatch { left: String, right: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, FloragenError>;

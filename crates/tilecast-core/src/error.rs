//! Map and configuration errors.

use thiserror::Error;

/// Failure to read or validate a tile map or render configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Map or config file could not be read
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input did not match the expected shape
    #[error("malformed JSON: {0}")]
    Serialization(String),

    /// Tile map is empty, ragged or otherwise unusable
    #[error("invalid map: {0}")]
    InvalidMap(String),

    /// Configuration value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

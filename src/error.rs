use std::io;

use thiserror::Error;

/// Reasons a raw query cannot be turned into a search pattern.
///
/// Kept apart from an empty result so callers can tell a malformed query
/// from one that simply matched nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("invalid character {character:?} at position {position}, use letters, digits, '?' or '*'")]
    InvalidCharacter { character: char, position: usize },
}

/// Error is an error which may occur while loading or configuring a wordlist.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("failed to load search configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

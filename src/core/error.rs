// error.rs - Error types for the island detection core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IslandError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Window [{begin}, {end}) is not a valid range for a sequence of length {len}")]
    WindowOutOfRange { begin: usize, end: usize, len: usize },

    #[error("Sequence of {0} bp exceeds the supported maximum of {max} bp", max = u32::MAX)]
    SequenceTooLong(usize),
}

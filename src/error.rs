//! Error types for geohash and codec operations.

use crate::types::Direction;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeohashError {
    /// A character that is not part of the alphabet (or not `0`/`1` in a binary geohash)
    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Input is empty")]
    EmptyInput,

    /// Requested precision does not fit the data that was supplied
    #[error("Precision mismatch: requested {requested}, available {available}")]
    PrecisionMismatch { requested: usize, available: usize },

    /// Neighbor step ran off the edge of the grid
    #[error("Cannot step {direction} from a cell on the edge of the grid")]
    BoundaryExhausted { direction: Direction },

    #[error("Integer overflow while decoding {0:?}")]
    Overflow(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GeohashError>;

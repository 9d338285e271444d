//! Error types for path conversion operations

use thiserror::Error;

/// The error type for character conversions
///
/// Decomposition, iteration, comparison, composition and the lexical
/// algorithms never fail; only translating between code-unit types can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The input is not a well-formed sequence in the source encoding
    #[error("{codecvt}: invalid sequence at code unit {position}")]
    InvalidSequence { codecvt: String, position: usize },

    /// A code point has no representation in the target encoding
    #[error("{codecvt}: code point U+{code_point:04X} cannot be represented")]
    Unmappable { codecvt: String, code_point: u32 },
}

impl PathError {
    /// Name of the conversion facet that rejected the input
    pub fn codecvt(&self) -> &str {
        match self {
            PathError::InvalidSequence { codecvt, .. } | PathError::Unmappable { codecvt, .. } => {
                codecvt
            }
        }
    }
}

/// The error returned when a [`Generation`](crate::Generation) name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized generation {value:?}, expected v3 or v4")]
pub struct ParseGenerationError {
    /// The rejected input, as given
    pub value: String,
}

/// Result type for path conversion operations
pub type Result<T> = std::result::Result<T, PathError>;

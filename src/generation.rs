//! Semantics generations
//!
//! The v3 and v4 generations disagree on trailing separators: whether they
//! imply a final `"."` element, whether `remove_filename` strips them, and
//! how normalization renders them. Every generation-dependent operation
//! takes a [`Generation`] so both can be used side by side.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseGenerationError;

/// Environment variable read by [`Generation::from_env`]
pub const GENERATION_ENV_VAR: &str = "LEXICAL_PATH_GENERATION";

/// Trailing-separator and filename semantics selector
///
/// # Examples
///
/// ```
/// use lexical_path::{Generation, PosixPath};
///
/// let path = PosixPath::from("foo/");
/// assert_eq!(path.filename(Generation::V3), ".");
/// assert!(path.filename(Generation::V4).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    /// Legacy semantics: a trailing separator implies a final `"."` element
    V3,
    /// Current semantics: a trailing separator adds no element
    #[default]
    V4,
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => write!(f, "v3"),
            Self::V4 => write!(f, "v4"),
        }
    }
}

impl FromStr for Generation {
    type Err = ParseGenerationError;

    /// Recognizes `v3`, `v4`, `3` and `4` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v3" | "3" => Ok(Self::V3),
            "v4" | "4" => Ok(Self::V4),
            _ => Err(ParseGenerationError {
                value: s.to_string(),
            }),
        }
    }
}

impl Generation {
    /// Read the generation from [`GENERATION_ENV_VAR`]
    ///
    /// Falls back to the default when the variable is unset or unparsable.
    pub fn from_env() -> Self {
        match env::var(GENERATION_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                log::debug!("Ignoring {GENERATION_ENV_VAR}: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}

//! # lexical-path
//!
//! A portable path value type with purely lexical operations.
//!
//! A [`Path`] owns a string of native code units and knows the grammar of
//! one [`Convention`]: [`Posix`] (bytes, `/`) or [`Windows`] (UTF-16 units,
//! `\` and `/`, drive and UNC root names). Nothing here touches a
//! filesystem. Decomposition, iteration, comparison, composition,
//! normalization and relativization are total functions over the stored
//! text; only conversions between code-unit types can fail.
//!
//! Operations whose results changed between the two historical generations
//! of the API take an explicit [`Generation`], so both behaviours can be used
//! side by side.
//!
//! ## Examples
//!
//! ### Decomposition
//!
//! ```rust
//! use lexical_path::{Generation, PosixPath};
//!
//! let path = PosixPath::from("/srv/www/");
//! assert_eq!(path.root_directory(), "/");
//! assert_eq!(path.relative_path(), "srv/www/");
//! assert_eq!(path.filename(Generation::V3), ".");
//! assert!(path.filename(Generation::V4).is_empty());
//! ```
//!
//! ### Composition and lexical algorithms
//!
//! ```rust
//! use lexical_path::{Generation, PosixPath, WindowsPath};
//!
//! let path = PosixPath::from("foo") / "./bar/..";
//! assert_eq!(path.lexically_normal(Generation::V4), "foo/");
//!
//! let target = PosixPath::from("/a/d");
//! assert_eq!(target.lexically_relative(&PosixPath::from("/a/b/c")), "../../d");
//!
//! let mut path = WindowsPath::from(r"c:\work");
//! path /= "d:notes";
//! assert_eq!(path, "d:notes");
//! ```
//!
//! ### Conversion
//!
//! ```rust
//! use lexical_path::codecvt::Latin1Codecvt;
//! use lexical_path::{PosixPath, WindowsPath};
//!
//! let path = WindowsPath::from(r"c:\café");
//! assert_eq!(path.narrow_with(&Latin1Codecvt).unwrap(), b"c:\\caf\xe9");
//! assert!(PosixPath::from(b"\xff".as_slice()).string().is_err());
//! ```

pub mod codecvt;
mod compare;
mod compose;
mod convention;
mod convert;
pub mod decompose;
mod error;
mod generation;
mod iter;
mod normalize;
mod path;
pub mod portability;
pub mod quoted;
mod relative;
mod source;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use convention::{CodeUnit, Convention, NativeConvention, Posix, Windows};
pub use error::{ParseGenerationError, PathError, Result};
pub use generation::{Generation, GENERATION_ENV_VAR};
pub use iter::{Element, ElementKind, Iter};
pub use path::{NativePath, Path, PosixPath, WindowsPath};
pub use source::PathSource;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Conversions between the native form and other code-unit types
//!
//! A conversion that crosses between narrow and wide units goes through a
//! [`Codecvt`]. The `*_with` variants take one explicitly; the others use
//! [`default_codecvt`]. A conversion that stays in the native unit type
//! never consults a facet and cannot fail.

use crate::codecvt::{default_codecvt, Codecvt};
use crate::convention::{CodeUnit, Convention};
use crate::error::{PathError, Result};
use crate::generation::Generation;
use crate::iter::ElementKind;
use crate::path::Path;

fn rejected(err: PathError) -> PathError {
    log::debug!("Conversion rejected by {}: {}", err.codecvt(), err);
    err
}

impl<C: Convention> Path<C> {
    /// Build a path from narrow bytes using the default facet
    pub fn from_narrow(bytes: &[u8]) -> Result<Self> {
        Self::from_narrow_with(bytes, default_codecvt().as_ref())
    }

    /// Build a path from narrow bytes using `codecvt`
    pub fn from_narrow_with(bytes: &[u8], codecvt: &dyn Codecvt) -> Result<Self> {
        <C::Unit as CodeUnit>::from_narrow(bytes, codecvt)
            .map(Self::from_vec)
            .map_err(rejected)
    }

    /// Build a path from UTF-16 units using the default facet
    pub fn from_wide(wide: &[u16]) -> Result<Self> {
        Self::from_wide_with(wide, default_codecvt().as_ref())
    }

    /// Build a path from UTF-16 units using `codecvt`
    pub fn from_wide_with(wide: &[u16], codecvt: &dyn Codecvt) -> Result<Self> {
        <C::Unit as CodeUnit>::from_wide(wide, codecvt)
            .map(Self::from_vec)
            .map_err(rejected)
    }

    /// The native form as Unicode text
    ///
    /// Narrow paths must be UTF-8 and wide paths well-formed UTF-16.
    ///
    /// # Examples
    /// ```
    /// use lexical_path::{PathError, PosixPath};
    ///
    /// assert_eq!(PosixPath::from("a/b").string().unwrap(), "a/b");
    ///
    /// let err = PosixPath::from(b"a/\xff".as_slice()).string().unwrap_err();
    /// assert!(matches!(err, PathError::InvalidSequence { position: 2, .. }));
    /// ```
    pub fn string(&self) -> Result<String> {
        <C::Unit as CodeUnit>::decode(self.native()).map_err(rejected)
    }

    /// The native form as text, with malformed sequences replaced by U+FFFD
    pub fn to_string_lossy(&self) -> String {
        <C::Unit as CodeUnit>::decode_lossy(self.native())
    }

    /// The path as narrow bytes, converted with the default facet if needed
    pub fn narrow(&self) -> Result<Vec<u8>> {
        self.narrow_with(default_codecvt().as_ref())
    }

    /// The path as narrow bytes, converted with `codecvt` if needed
    pub fn narrow_with(&self, codecvt: &dyn Codecvt) -> Result<Vec<u8>> {
        <C::Unit as CodeUnit>::to_narrow(self.native(), codecvt).map_err(rejected)
    }

    /// The path as UTF-16 units, converted with the default facet if needed
    pub fn wstring(&self) -> Result<Vec<u16>> {
        self.wstring_with(default_codecvt().as_ref())
    }

    /// The path as UTF-16 units, converted with `codecvt` if needed
    pub fn wstring_with(&self, codecvt: &dyn Codecvt) -> Result<Vec<u16>> {
        <C::Unit as CodeUnit>::to_wide(self.native(), codecvt).map_err(rejected)
    }

    /// A copy in generic form: every separator run written as one `/`
    ///
    /// Separators inside the root name become `/`, the root directory is a
    /// single `/`, names are joined by single `/` and a trailing separator
    /// survives as one `/`.
    ///
    /// # Examples
    /// ```
    /// use lexical_path::{PosixPath, WindowsPath};
    ///
    /// let path = WindowsPath::from(r"\\server\share\\dir");
    /// assert_eq!(path.generic_string().unwrap(), "//server/share/dir");
    ///
    /// let path = PosixPath::from("a//b///c/");
    /// assert_eq!(path.generic_string().unwrap(), "a/b/c/");
    /// ```
    pub fn generic_path(&self) -> Self {
        let slash = <C::Unit as CodeUnit>::SLASH;
        let mut units = Vec::with_capacity(self.len());
        let mut names = 0;
        for element in self.iter(Generation::V4) {
            match element.kind() {
                ElementKind::RootName => units.extend(element.units().iter().map(|&unit| {
                    if C::is_directory_separator(unit) {
                        slash
                    } else {
                        unit
                    }
                })),
                ElementKind::RootDirectory => units.push(slash),
                _ => {
                    if names > 0 {
                        units.push(slash);
                    }
                    units.extend_from_slice(element.units());
                    names += 1;
                }
            }
        }
        if self.has_trailing_separator() {
            units.push(slash);
        }
        Self::from_vec(units)
    }

    /// [`generic_path`](Self::generic_path) as Unicode text
    pub fn generic_string(&self) -> Result<String> {
        self.generic_path().string()
    }
}

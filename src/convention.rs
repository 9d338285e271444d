//! Path conventions and the separator/element classifier
//!
//! A [`Convention`] fixes the native code-unit type and the grammar of
//! separators and root names. Two conventions are provided:
//!
//! - [`Posix`]: byte code units, a single `/` separator, no root names.
//! - [`Windows`]: UTF-16 code units, `\` (preferred) and `/` separators,
//!   drive letters, devices and UNC hosts as root names.

use std::fmt;
use std::hash::Hash;

use crate::codecvt::{self, Codecvt};
use crate::decompose;
use crate::error::{PathError, Result};

/// A native code unit: a byte for POSIX paths, a UTF-16 unit for Windows paths
///
/// Only `.`, `:`, `?` and the separators carry syntactic meaning; every other
/// value is opaque.
pub trait CodeUnit: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    const DOT: Self;
    const SLASH: Self;
    const BACKSLASH: Self;
    const COLON: Self;
    const QUESTION: Self;

    /// The single-element `"."` path, used for implicit trailing elements
    const DOT_ELEMENT: &'static [Self];

    /// Numeric value of the unit
    fn value(self) -> u32;

    fn is_ascii_alphabetic(self) -> bool {
        matches!(self.value(), 0x41..=0x5a | 0x61..=0x7a)
    }

    /// Characters allowed between the first letter of a device root name and its colon
    fn is_device_name_char(self) -> bool {
        matches!(self.value(), 0x30..=0x39 | 0x41..=0x5a | 0x61..=0x7a | 0x24)
    }

    /// Append the units encoding `text` to `out`
    fn extend_from_str(out: &mut Vec<Self>, text: &str);

    /// Decode to UTF-8 text, failing on malformed sequences
    fn decode(units: &[Self]) -> Result<String>;

    /// Decode to UTF-8 text, replacing malformed sequences
    fn decode_lossy(units: &[Self]) -> String;

    fn to_narrow(units: &[Self], cvt: &dyn Codecvt) -> Result<Vec<u8>>;

    fn to_wide(units: &[Self], cvt: &dyn Codecvt) -> Result<Vec<u16>>;

    fn from_narrow(bytes: &[u8], cvt: &dyn Codecvt) -> Result<Vec<Self>>;

    fn from_wide(wide: &[u16], cvt: &dyn Codecvt) -> Result<Vec<Self>>;
}

impl CodeUnit for u8 {
    const DOT: Self = b'.';
    const SLASH: Self = b'/';
    const BACKSLASH: Self = b'\\';
    const COLON: Self = b':';
    const QUESTION: Self = b'?';
    const DOT_ELEMENT: &'static [Self] = b".";

    fn value(self) -> u32 {
        u32::from(self)
    }

    fn extend_from_str(out: &mut Vec<Self>, text: &str) {
        out.extend_from_slice(text.as_bytes());
    }

    fn decode(units: &[Self]) -> Result<String> {
        std::str::from_utf8(units)
            .map(str::to_owned)
            .map_err(|err| PathError::InvalidSequence {
                codecvt: "utf-8".to_string(),
                position: err.valid_up_to(),
            })
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }

    fn to_narrow(units: &[Self], _cvt: &dyn Codecvt) -> Result<Vec<u8>> {
        Ok(units.to_vec())
    }

    fn to_wide(units: &[Self], cvt: &dyn Codecvt) -> Result<Vec<u16>> {
        cvt.narrow_to_wide(units)
    }

    fn from_narrow(bytes: &[u8], _cvt: &dyn Codecvt) -> Result<Vec<Self>> {
        Ok(bytes.to_vec())
    }

    fn from_wide(wide: &[u16], cvt: &dyn Codecvt) -> Result<Vec<Self>> {
        cvt.wide_to_narrow(wide)
    }
}

impl CodeUnit for u16 {
    const DOT: Self = b'.' as u16;
    const SLASH: Self = b'/' as u16;
    const BACKSLASH: Self = b'\\' as u16;
    const COLON: Self = b':' as u16;
    const QUESTION: Self = b'?' as u16;
    const DOT_ELEMENT: &'static [Self] = &[b'.' as u16];

    fn value(self) -> u32 {
        u32::from(self)
    }

    fn extend_from_str(out: &mut Vec<Self>, text: &str) {
        out.extend(text.encode_utf16());
    }

    fn decode(units: &[Self]) -> Result<String> {
        codecvt::decode_utf16(units, "utf-16")
    }

    fn decode_lossy(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }

    fn to_narrow(units: &[Self], cvt: &dyn Codecvt) -> Result<Vec<u8>> {
        cvt.wide_to_narrow(units)
    }

    fn to_wide(units: &[Self], _cvt: &dyn Codecvt) -> Result<Vec<u16>> {
        Ok(units.to_vec())
    }

    fn from_narrow(bytes: &[u8], cvt: &dyn Codecvt) -> Result<Vec<Self>> {
        cvt.narrow_to_wide(bytes)
    }

    fn from_wide(wide: &[u16], _cvt: &dyn Codecvt) -> Result<Vec<Self>> {
        Ok(wide.to_vec())
    }
}

/// The grammar of one native path convention
pub trait Convention: Copy + Default + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    /// Native code-unit type
    type Unit: CodeUnit;

    /// Human-readable convention name
    const NAME: &'static str;

    /// Separator inserted by composition and normalization
    const PREFERRED_SEPARATOR: Self::Unit;

    /// Whether an absolute path needs a root name as well as a root directory
    const ABSOLUTE_NEEDS_ROOT_NAME: bool;

    /// Whether `unit` separates directories
    fn is_directory_separator(unit: Self::Unit) -> bool;

    /// Whether `unit` ends a path element
    ///
    /// This is every directory separator plus, for [`Windows`], the colon
    /// that terminates a drive root name (`"c:foo"` splits into `"c:"` and
    /// `"foo"`). A colon is never a directory separator.
    fn is_element_separator(unit: Self::Unit) -> bool;

    /// Length of the root name at the start of `units`
    fn root_name_size(units: &[Self::Unit]) -> usize;
}

/// Single-separator convention: bytes, `/`, no root names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posix;

impl Convention for Posix {
    type Unit = u8;

    const NAME: &'static str = "posix";
    const PREFERRED_SEPARATOR: u8 = b'/';
    const ABSOLUTE_NEEDS_ROOT_NAME: bool = false;

    fn is_directory_separator(unit: u8) -> bool {
        unit == b'/'
    }

    fn is_element_separator(unit: u8) -> bool {
        unit == b'/'
    }

    fn root_name_size(_units: &[u8]) -> usize {
        0
    }
}

/// Dual-separator convention: UTF-16 units, `\` and `/`, drive and UNC root names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Windows;

impl Convention for Windows {
    type Unit = u16;

    const NAME: &'static str = "windows";
    const PREFERRED_SEPARATOR: u16 = b'\\' as u16;
    const ABSOLUTE_NEEDS_ROOT_NAME: bool = true;

    fn is_directory_separator(unit: u16) -> bool {
        unit == u16::SLASH || unit == u16::BACKSLASH
    }

    fn is_element_separator(unit: u16) -> bool {
        Self::is_directory_separator(unit) || unit == u16::COLON
    }

    fn root_name_size(units: &[u16]) -> usize {
        decompose::dual_separator_root_name_size(units)
    }
}

/// Convention of the host platform
#[cfg(windows)]
pub type NativeConvention = Windows;

/// Convention of the host platform
#[cfg(not(windows))]
pub type NativeConvention = Posix;

/// Map every directory separator to `/`, leaving other units alone
pub(crate) fn canonical<C: Convention>(unit: C::Unit) -> C::Unit {
    if C::is_directory_separator(unit) {
        <C::Unit as CodeUnit>::SLASH
    } else {
        unit
    }
}

/// Compare two unit runs treating all directory separators as equal
pub(crate) fn units_equal<C: Convention>(a: &[C::Unit], b: &[C::Unit]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(&x, &y)| canonical::<C>(x) == canonical::<C>(y))
}

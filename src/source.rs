//! Path sources
//!
//! [`PathSource`] is the one capability every constructor and composer
//! accepts: "can provide a run of code units of type `U`". Text sources are
//! UTF-8 (`str`, `String`, `char`) and are re-encoded for wide conventions;
//! unit slices and other paths are used as they are. Sources in a foreign
//! code-unit type go through a [`Codecvt`](crate::codecvt::Codecvt) via
//! [`Path::from_narrow`](crate::Path::from_narrow) and
//! [`Path::from_wide`](crate::Path::from_wide) instead.

use std::borrow::Cow;

use crate::convention::{CodeUnit, Convention};
use crate::path::Path;

/// A source of native code units of type `U`
pub trait PathSource<U: CodeUnit> {
    fn units(&self) -> Cow<'_, [U]>;
}

impl PathSource<u8> for str {
    fn units(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl PathSource<u16> for str {
    fn units(&self) -> Cow<'_, [u16]> {
        Cow::Owned(self.encode_utf16().collect())
    }
}

impl PathSource<u8> for String {
    fn units(&self) -> Cow<'_, [u8]> {
        PathSource::<u8>::units(self.as_str())
    }
}

impl PathSource<u16> for String {
    fn units(&self) -> Cow<'_, [u16]> {
        PathSource::<u16>::units(self.as_str())
    }
}

impl PathSource<u8> for char {
    fn units(&self) -> Cow<'_, [u8]> {
        let mut buf = [0; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl PathSource<u16> for char {
    fn units(&self) -> Cow<'_, [u16]> {
        let mut buf = [0; 2];
        Cow::Owned(self.encode_utf16(&mut buf).to_vec())
    }
}

impl<U: CodeUnit> PathSource<U> for [U] {
    fn units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(self)
    }
}

impl<U: CodeUnit, const N: usize> PathSource<U> for [U; N] {
    fn units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<U: CodeUnit> PathSource<U> for Vec<U> {
    fn units(&self) -> Cow<'_, [U]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<C: Convention> PathSource<C::Unit> for Path<C> {
    fn units(&self) -> Cow<'_, [C::Unit]> {
        Cow::Borrowed(self.native())
    }
}

impl<U: CodeUnit, T: PathSource<U> + ?Sized> PathSource<U> for &T {
    fn units(&self) -> Cow<'_, [U]> {
        (**self).units()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::{Posix, Windows};

    fn units_of<U: CodeUnit, S: PathSource<U> + ?Sized>(source: &S) -> Vec<U> {
        source.units().into_owned()
    }

    #[test]
    fn test_text_sources() {
        assert_eq!(units_of::<u8, _>("a/b"), b"a/b");
        assert_eq!(
            units_of::<u16, _>("a/é"),
            "a/é".encode_utf16().collect::<Vec<_>>()
        );
        assert_eq!(units_of::<u8, _>(&String::from("x")), b"x");
        assert_eq!(units_of::<u8, _>(&'é'), "é".as_bytes());
        assert_eq!(units_of::<u16, _>(&'/'), [u16::SLASH]);
    }

    #[test]
    fn test_unit_and_path_sources() {
        assert_eq!(units_of::<u8, _>(b"raw\xff".as_slice()), b"raw\xff");
        assert_eq!(units_of::<u16, _>(&vec![0x61u16, 0x62]), [0x61, 0x62]);

        let posix = Path::<Posix>::from("a/b");
        assert_eq!(units_of::<u8, _>(&posix), b"a/b");
        let windows = Path::<Windows>::from(r"c:\x");
        assert_eq!(
            units_of::<u16, _>(&&windows),
            r"c:\x".encode_utf16().collect::<Vec<_>>()
        );
    }
}

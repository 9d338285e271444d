//! Element iteration
//!
//! A path iterates as its root name (one element), its root directory (one
//! element holding a single separator, however long the run) and then every
//! separator-delimited name of the relative path. Under v3 a relative path
//! ending in a separator also yields an implicit trailing `"."`.
//!
//! ```
//! use lexical_path::{Generation, PosixPath};
//!
//! let path = PosixPath::from("/usr//lib/");
//! let v3: Vec<_> = path.iter(Generation::V3).map(|e| e.to_string_lossy()).collect();
//! assert_eq!(v3, ["/", "usr", "lib", "."]);
//!
//! let v4: Vec<_> = path.iter(Generation::V4).map(|e| e.to_string_lossy()).collect();
//! assert_eq!(v4, ["/", "usr", "lib"]);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::convention::{canonical, CodeUnit, Convention};
use crate::decompose;
use crate::generation::Generation;
use crate::path::Path;
use crate::source::PathSource;

/// What an [`Element`] stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    RootName,
    RootDirectory,
    /// `"."`, written or implied by a v3 trailing separator
    CurDir,
    /// `".."`
    ParentDir,
    Normal,
}

/// One element of a path, borrowed from it
#[derive(Clone, Copy)]
pub struct Element<'a, C: Convention> {
    units: &'a [C::Unit],
    kind: ElementKind,
    convention: PhantomData<C>,
}

impl<'a, C: Convention> Element<'a, C> {
    fn new(units: &'a [C::Unit], kind: ElementKind) -> Self {
        Self {
            units,
            kind,
            convention: PhantomData,
        }
    }

    fn name(units: &'a [C::Unit]) -> Self {
        let dot = <C::Unit as CodeUnit>::DOT;
        let kind = match units {
            [unit] if *unit == dot => ElementKind::CurDir,
            [a, b] if *a == dot && *b == dot => ElementKind::ParentDir,
            _ => ElementKind::Normal,
        };
        Self::new(units, kind)
    }

    /// What the element stands for
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The element's code units, borrowed from the path
    pub fn units(&self) -> &'a [C::Unit] {
        self.units
    }

    /// Root name or root directory
    pub fn is_root(&self) -> bool {
        matches!(self.kind, ElementKind::RootName | ElementKind::RootDirectory)
    }

    /// An owned path holding just this element
    pub fn to_path(&self) -> Path<C> {
        Path::from(self.units)
    }

    /// The element as text, with malformed sequences replaced by U+FFFD
    pub fn to_string_lossy(&self) -> String {
        <C::Unit as CodeUnit>::decode_lossy(self.units)
    }

    fn canonical_units(&self) -> impl Iterator<Item = C::Unit> + 'a {
        self.units.iter().map(|&unit| canonical::<C>(unit))
    }
}

impl<C: Convention> fmt::Debug for Element<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.to_string_lossy())
    }
}

impl<C: Convention> PartialEq for Element<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.units.len() == other.units.len() && self.canonical_units().eq(other.canonical_units())
    }
}

impl<C: Convention> Eq for Element<'_, C> {}

impl<C: Convention> PartialOrd for Element<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Convention> Ord for Element<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_units().cmp(other.canonical_units())
    }
}

impl<C: Convention> Hash for Element<'_, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.units.len());
        for unit in self.canonical_units() {
            unit.hash(state);
        }
    }
}

impl<C: Convention> PathSource<C::Unit> for Element<'_, C> {
    fn units(&self) -> Cow<'_, [C::Unit]> {
        Cow::Borrowed(self.units)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Start,
    RootName,
    RootDirectory,
    Body,
    Trailing,
    End,
}

/// Double-ended iterator over the elements of a [`Path`]
///
/// Holds sub-slices of the path's buffer; no element is copied.
#[derive(Clone)]
pub struct Iter<'a, C: Convention> {
    root_name: &'a [C::Unit],
    root_directory: &'a [C::Unit],
    body: &'a [C::Unit],
    trailing_dot: bool,
    front: Slot,
    back: Slot,
}

impl<'a, C: Convention> Iter<'a, C> {
    pub(crate) fn new(units: &'a [C::Unit], generation: Generation) -> Self {
        let spans = decompose::spans::<C>(units);
        let root_directory = &units[spans.root_directory.clone()];
        let relative = &units[spans.relative_path.clone()];
        let body = trim_end_separators::<C>(relative);
        Self {
            root_name: &units[spans.root_name],
            root_directory: &root_directory[..root_directory.len().min(1)],
            body,
            trailing_dot: generation == Generation::V3 && body.len() < relative.len(),
            front: Slot::RootName,
            back: Slot::Trailing,
        }
    }
}

fn trim_start_separators<C: Convention>(units: &[C::Unit]) -> &[C::Unit] {
    let skip = units
        .iter()
        .take_while(|&&unit| C::is_directory_separator(unit))
        .count();
    &units[skip..]
}

fn trim_end_separators<C: Convention>(units: &[C::Unit]) -> &[C::Unit] {
    let skip = units
        .iter()
        .rev()
        .take_while(|&&unit| C::is_directory_separator(unit))
        .count();
    &units[..units.len() - skip]
}

impl<'a, C: Convention> Iterator for Iter<'a, C> {
    type Item = Element<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.front <= self.back {
            match self.front {
                Slot::Start => self.front = Slot::RootName,
                Slot::RootName => {
                    self.front = Slot::RootDirectory;
                    if !self.root_name.is_empty() {
                        return Some(Element::new(self.root_name, ElementKind::RootName));
                    }
                }
                Slot::RootDirectory => {
                    self.front = Slot::Body;
                    if !self.root_directory.is_empty() {
                        return Some(Element::new(
                            self.root_directory,
                            ElementKind::RootDirectory,
                        ));
                    }
                }
                Slot::Body if self.body.is_empty() => self.front = Slot::Trailing,
                Slot::Body => {
                    let end = decompose::find_separator::<C>(self.body);
                    let (element, rest) = self.body.split_at(end);
                    self.body = trim_start_separators::<C>(rest);
                    return Some(Element::name(element));
                }
                Slot::Trailing => {
                    self.front = Slot::End;
                    if self.trailing_dot {
                        return Some(Element::name(<C::Unit as CodeUnit>::DOT_ELEMENT));
                    }
                }
                Slot::End => break,
            }
        }
        None
    }
}

impl<C: Convention> DoubleEndedIterator for Iter<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front <= self.back {
            match self.back {
                Slot::End => self.back = Slot::Trailing,
                Slot::Trailing => {
                    self.back = Slot::Body;
                    if self.trailing_dot {
                        return Some(Element::name(<C::Unit as CodeUnit>::DOT_ELEMENT));
                    }
                }
                Slot::Body if self.body.is_empty() => self.back = Slot::RootDirectory,
                Slot::Body => {
                    let start = self
                        .body
                        .iter()
                        .rposition(|&unit| C::is_directory_separator(unit))
                        .map_or(0, |pos| pos + 1);
                    let (rest, element) = self.body.split_at(start);
                    self.body = trim_end_separators::<C>(rest);
                    return Some(Element::name(element));
                }
                Slot::RootDirectory => {
                    self.back = Slot::RootName;
                    if !self.root_directory.is_empty() {
                        return Some(Element::new(
                            self.root_directory,
                            ElementKind::RootDirectory,
                        ));
                    }
                }
                Slot::RootName => {
                    self.back = Slot::Start;
                    if !self.root_name.is_empty() {
                        return Some(Element::new(self.root_name, ElementKind::RootName));
                    }
                }
                Slot::Start => break,
            }
        }
        None
    }
}

impl<C: Convention> FusedIterator for Iter<'_, C> {}

impl<C: Convention> Path<C> {
    /// Iterate over the elements of the path under `generation`
    pub fn iter(&self, generation: Generation) -> Iter<'_, C> {
        Iter::new(self.native(), generation)
    }
}

impl<'a, C: Convention> IntoIterator for &'a Path<C> {
    type Item = Element<'a, C>;
    type IntoIter = Iter<'a, C>;

    /// Elements under the default (v4) generation
    fn into_iter(self) -> Self::IntoIter {
        self.iter(Generation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PosixPath, WindowsPath};
    use Generation::{V3, V4};

    fn forward<C: Convention>(path: &Path<C>, generation: Generation) -> Vec<String> {
        path.iter(generation).map(|e| e.to_string_lossy()).collect()
    }

    fn backward<C: Convention>(path: &Path<C>, generation: Generation) -> Vec<String> {
        let mut elements: Vec<_> = path
            .iter(generation)
            .rev()
            .map(|e| e.to_string_lossy())
            .collect();
        elements.reverse();
        elements
    }

    #[test]
    fn test_posix_iteration() {
        let cases: &[(&str, &[&str], &[&str])] = &[
            ("", &[], &[]),
            ("/", &["/"], &["/"]),
            ("///", &["/"], &["/"]),
            (".", &["."], &["."]),
            ("foo", &["foo"], &["foo"]),
            ("foo/", &["foo", "."], &["foo"]),
            ("foo//bar//", &["foo", "bar", "."], &["foo", "bar"]),
            ("/foo/./../bar", &["/", "foo", ".", "..", "bar"], &["/", "foo", ".", "..", "bar"]),
            ("//net/x", &["/", "net", "x"], &["/", "net", "x"]),
        ];
        for &(input, v3, v4) in cases {
            let path = PosixPath::from(input);
            assert_eq!(forward(&path, V3), v3, "v3 elements of {input:?}");
            assert_eq!(forward(&path, V4), v4, "v4 elements of {input:?}");
            assert_eq!(backward(&path, V3), v3, "reverse v3 elements of {input:?}");
            assert_eq!(backward(&path, V4), v4, "reverse v4 elements of {input:?}");
        }
    }

    #[test]
    fn test_windows_iteration() {
        let cases: &[(&str, &[&str])] = &[
            ("c:", &["c:"]),
            ("c:foo", &["c:", "foo"]),
            (r"c:\foo\bar", &["c:", r"\", "foo", "bar"]),
            ("//host", &["//host"]),
            (r"\\host\share/dir", &[r"\\host", r"\", "share", "dir"]),
            ("//", &["//"]),
            (r"\foo", &[r"\", "foo"]),
            (r"\\?\c:\x", &[r"\\?\c:", r"\", "x"]),
        ];
        for &(input, expected) in cases {
            let path = WindowsPath::from(input);
            assert_eq!(forward(&path, V4), expected, "elements of {input:?}");
            assert_eq!(backward(&path, V4), expected, "reverse elements of {input:?}");
        }

        let path = WindowsPath::from(r"c:foo\");
        assert_eq!(forward(&path, V3), ["c:", "foo", "."]);
    }

    #[test]
    fn test_element_kinds() {
        let path = WindowsPath::from(r"c:\a\.\..\b\");
        let kinds: Vec<_> = path.iter(V3).map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            [
                ElementKind::RootName,
                ElementKind::RootDirectory,
                ElementKind::Normal,
                ElementKind::CurDir,
                ElementKind::ParentDir,
                ElementKind::Normal,
                ElementKind::CurDir,
            ]
        );
    }

    #[test]
    fn test_mixed_direction_iteration() {
        let path = PosixPath::from("/a/b/c/");
        let mut iter = path.iter(V3);
        assert_eq!(iter.next().map(|e| e.to_string_lossy()).as_deref(), Some("/"));
        assert_eq!(iter.next_back().map(|e| e.to_string_lossy()).as_deref(), Some("."));
        assert_eq!(iter.next().map(|e| e.to_string_lossy()).as_deref(), Some("a"));
        assert_eq!(iter.next_back().map(|e| e.to_string_lossy()).as_deref(), Some("c"));
        assert_eq!(iter.next().map(|e| e.to_string_lossy()).as_deref(), Some("b"));
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn test_element_equality_ignores_separator_spelling() {
        let a = WindowsPath::from(r"\\host\x");
        let b = WindowsPath::from("//host/x");
        assert!(a.iter(V4).eq(b.iter(V4)));

        let a = PosixPath::from("a");
        let b = PosixPath::from("b");
        assert!(a.iter(V4).lt(b.iter(V4)));
    }

    #[test]
    fn test_into_iterator_uses_v4() {
        let path = PosixPath::from("x/y/");
        let names: Vec<_> = (&path).into_iter().map(|e| e.to_path()).collect();
        assert_eq!(names, [PosixPath::from("x"), PosixPath::from("y")]);
    }
}

//! The path value type
//!
//! [`Path`] owns a buffer of native code units and nothing else. Every
//! observer re-derives the decomposition from the buffer on demand, so a
//! path can be mutated freely without invalidating cached state.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

use crate::convention::{CodeUnit, Convention, Posix, Windows};
use crate::decompose::{self, FilenameSpan, Spans};
use crate::generation::Generation;
use crate::source::PathSource;

/// A pathname under convention `C`
///
/// # Examples
///
/// ```
/// use lexical_path::{Generation, PosixPath, WindowsPath};
///
/// let path = PosixPath::from("/usr/lib/libc.so.6");
/// assert_eq!(path.root_directory(), "/");
/// assert_eq!(path.parent_path(), "/usr/lib");
/// assert_eq!(path.filename(Generation::V4), "libc.so.6");
/// assert_eq!(path.extension(Generation::V4), ".6");
///
/// let path = WindowsPath::from(r"c:\Windows\notepad.exe");
/// assert_eq!(path.root_name(), "c:");
/// assert!(path.is_absolute());
/// assert_eq!(path.stem(Generation::V4), "notepad");
/// ```
#[derive(Clone, Default)]
pub struct Path<C: Convention> {
    inner: Vec<C::Unit>,
    convention: PhantomData<C>,
}

/// Path under the single-separator convention
pub type PosixPath = Path<Posix>;

/// Path under the dual-separator convention
pub type WindowsPath = Path<Windows>;

/// Path under the host platform's convention
pub type NativePath = Path<crate::convention::NativeConvention>;

impl<C: Convention> Path<C> {
    /// An empty path
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub(crate) fn from_vec(inner: Vec<C::Unit>) -> Self {
        Self {
            inner,
            convention: PhantomData,
        }
    }

    /// Build a path from an iterator of native code units
    pub fn from_units<I: IntoIterator<Item = C::Unit>>(units: I) -> Self {
        Self::from_vec(units.into_iter().collect())
    }

    /// The stored native code units
    pub fn native(&self) -> &[C::Unit] {
        &self.inner
    }

    /// Consume the path, returning its native code units
    pub fn into_native(self) -> Vec<C::Unit> {
        self.inner
    }

    pub(crate) fn native_mut(&mut self) -> &mut Vec<C::Unit> {
        &mut self.inner
    }

    /// Number of stored code units
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the path holds no code units
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Make the path empty
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Exchange contents with `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Root-name, root-directory and relative-path spans of the buffer
    pub fn spans(&self) -> Spans {
        decompose::spans::<C>(&self.inner)
    }

    fn slice(&self, range: Range<usize>) -> Self {
        Self::from_vec(self.inner[range].to_vec())
    }

    /// The root name (drive, device, UNC host or namespace prefix), empty under POSIX
    pub fn root_name(&self) -> Self {
        self.slice(self.spans().root_name)
    }

    /// The full run of separators after the root name
    pub fn root_directory(&self) -> Self {
        self.slice(self.spans().root_directory)
    }

    /// Root name followed by root directory
    pub fn root_path(&self) -> Self {
        self.slice(self.spans().root_path())
    }

    /// Everything after the root path
    pub fn relative_path(&self) -> Self {
        self.slice(self.spans().relative_path)
    }

    /// The path without its last element and the separators before it
    pub fn parent_path(&self) -> Self {
        self.slice(0..decompose::find_parent_path_size::<C>(&self.inner))
    }

    /// The last element of the path
    ///
    /// v3 reports `"."` for a trailing separator and the whole stored
    /// string when the relative path is empty (so `"/"` and `"c:"` are their
    /// own filenames). v4 reports an empty filename in both cases.
    pub fn filename(&self, generation: Generation) -> Self {
        match decompose::find_filename::<C>(&self.inner, generation) {
            FilenameSpan::Span(range) => self.slice(range),
            FilenameSpan::ImplicitDot => {
                Self::from_vec(<C::Unit as CodeUnit>::DOT_ELEMENT.to_vec())
            }
        }
    }

    /// The filename without its extension
    pub fn stem(&self, generation: Generation) -> Self {
        let mut name = self.filename(generation);
        if let Some(pos) = decompose::find_extension(&name.inner) {
            name.inner.truncate(pos);
        }
        name
    }

    /// The filename's extension, dot included
    pub fn extension(&self, generation: Generation) -> Self {
        let name = self.filename(generation);
        match decompose::find_extension(&name.inner) {
            Some(pos) => name.slice(pos..name.len()),
            None => Self::new(),
        }
    }

    /// Whether [`root_name`](Self::root_name) is non-empty
    pub fn has_root_name(&self) -> bool {
        !self.spans().root_name.is_empty()
    }

    /// Whether [`root_directory`](Self::root_directory) is non-empty
    pub fn has_root_directory(&self) -> bool {
        !self.spans().root_directory.is_empty()
    }

    /// Whether [`root_path`](Self::root_path) is non-empty
    pub fn has_root_path(&self) -> bool {
        !self.spans().root_path().is_empty()
    }

    /// Whether [`relative_path`](Self::relative_path) is non-empty
    pub fn has_relative_path(&self) -> bool {
        !self.spans().relative_path.is_empty()
    }

    /// Whether [`parent_path`](Self::parent_path) is non-empty
    pub fn has_parent_path(&self) -> bool {
        decompose::find_parent_path_size::<C>(&self.inner) > 0
    }

    /// Whether [`filename`](Self::filename) is non-empty under `generation`
    pub fn has_filename(&self, generation: Generation) -> bool {
        !self.filename(generation).is_empty()
    }

    /// Whether [`stem`](Self::stem) is non-empty under `generation`
    pub fn has_stem(&self, generation: Generation) -> bool {
        !self.stem(generation).is_empty()
    }

    /// Whether [`extension`](Self::extension) is non-empty under `generation`
    pub fn has_extension(&self, generation: Generation) -> bool {
        !self.extension(generation).is_empty()
    }

    /// Whether the path identifies a location without reference to a current directory
    ///
    /// POSIX paths need a root directory; Windows paths need a root name and
    /// a root directory (`"\foo"` and `"c:foo"` are relative).
    pub fn is_absolute(&self) -> bool {
        let spans = self.spans();
        let rooted = !spans.root_directory.is_empty();
        if C::ABSOLUTE_NEEDS_ROOT_NAME {
            rooted && !spans.root_name.is_empty()
        } else {
            rooted
        }
    }

    /// Negation of [`is_absolute`](Self::is_absolute)
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Whether the relative path ends in a directory separator
    pub fn has_trailing_separator(&self) -> bool {
        decompose::has_trailing_separator::<C>(&self.inner)
    }

    /// Remove the filename
    ///
    /// v4 removes only the filename, so `"foo/bar"` becomes `"foo/"`. v3 also
    /// removes the separators before it, so `"foo/bar"` and `"foo/"` both
    /// become `"foo"`; a path that is only a root directory is kept.
    pub fn remove_filename(&mut self, generation: Generation) -> &mut Self {
        let keep = match generation {
            Generation::V4 => self.len() - decompose::find_filename_size::<C>(&self.inner),
            Generation::V3 => {
                let spans = self.spans();
                if spans.relative_path.is_empty() && !spans.root_directory.is_empty() {
                    self.len()
                } else {
                    decompose::find_parent_path_size::<C>(&self.inner)
                }
            }
        };
        self.inner.truncate(keep);
        self
    }

    /// Replace the filename with `filename`
    pub fn replace_filename<S>(&mut self, filename: &S, generation: Generation) -> &mut Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        self.remove_filename(generation);
        self.append(filename, generation)
    }

    /// Replace the extension; a leading dot is added when `extension` lacks one
    ///
    /// An empty `extension` just removes the current one.
    pub fn replace_extension<S>(&mut self, extension: &S, generation: Generation) -> &mut Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        let current = self.extension(generation).len();
        let keep = self.len() - current;
        self.inner.truncate(keep);

        let extension = extension.units();
        if let Some(&first) = extension.first() {
            if first != <C::Unit as CodeUnit>::DOT {
                self.inner.push(<C::Unit as CodeUnit>::DOT);
            }
            self.inner.extend_from_slice(&extension);
        }
        self
    }

    /// Rewrite every directory separator to the preferred separator
    pub fn make_preferred(&mut self) -> &mut Self {
        for unit in &mut self.inner {
            if C::is_directory_separator(*unit) {
                *unit = C::PREFERRED_SEPARATOR;
            }
        }
        self
    }
}

impl<C: Convention> fmt::Debug for Path<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", <C::Unit as CodeUnit>::decode_lossy(&self.inner))
    }
}

impl<'a, C, S> From<&'a S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit> + ?Sized,
{
    fn from(source: &'a S) -> Self {
        Self::from_vec(source.units().into_owned())
    }
}

impl<C: Convention> From<String> for Path<C>
where
    String: PathSource<C::Unit>,
{
    fn from(source: String) -> Self {
        Self::from(&source)
    }
}

impl<C: Convention> From<Vec<C::Unit>> for Path<C> {
    fn from(units: Vec<C::Unit>) -> Self {
        Self::from_vec(units)
    }
}

impl<C: Convention> AsRef<[C::Unit]> for Path<C> {
    fn as_ref(&self) -> &[C::Unit] {
        &self.inner
    }
}

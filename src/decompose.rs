//! Decomposition engine
//!
//! Every function here inspects a native code-unit buffer and returns a
//! size or span into it without allocating. Callers that query the same
//! path repeatedly may keep the returned [`Spans`].

use std::ops::Range;

use crate::convention::{CodeUnit, Convention};
use crate::generation::Generation;

/// Root-name, root-directory and relative-path spans of one buffer
///
/// The three spans are adjacent and together cover the whole buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spans {
    pub root_name: Range<usize>,
    pub root_directory: Range<usize>,
    pub relative_path: Range<usize>,
}

impl Spans {
    /// Span of root-name followed by root-directory
    pub fn root_path(&self) -> Range<usize> {
        self.root_name.start..self.root_directory.end
    }
}

/// Filename location as reported by [`find_filename`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameSpan {
    /// The filename is this part of the buffer
    Span(Range<usize>),
    /// The filename is a `"."` not present in the buffer (v3 trailing separator)
    ImplicitDot,
}

/// Decompose `units` into its three top-level spans
pub fn spans<C: Convention>(units: &[C::Unit]) -> Spans {
    let root_directory = find_root_directory::<C>(units);
    Spans {
        root_name: 0..root_directory.start,
        relative_path: root_directory.end..units.len(),
        root_directory,
    }
}

/// Size of the root name; always 0 for the single-separator convention
pub fn find_root_name_size<C: Convention>(units: &[C::Unit]) -> usize {
    C::root_name_size(units)
}

/// The run of directory separators that starts where the root name ends
pub fn find_root_directory<C: Convention>(units: &[C::Unit]) -> Range<usize> {
    let start = C::root_name_size(units);
    let len = units[start..]
        .iter()
        .take_while(|&&unit| C::is_directory_separator(unit))
        .count();
    start..start + len
}

/// Everything after the root directory
pub fn find_relative_path<C: Convention>(units: &[C::Unit]) -> Range<usize> {
    find_root_directory::<C>(units).end..units.len()
}

/// Size of the trailing separator-free run, never reaching into the root name
pub fn find_filename_size<C: Convention>(units: &[C::Unit]) -> usize {
    let root_name_size = C::root_name_size(units);
    units[root_name_size..]
        .iter()
        .rev()
        .take_while(|&&unit| !C::is_directory_separator(unit))
        .count()
}

/// Whether the relative path is non-empty and ends in a directory separator
pub fn has_trailing_separator<C: Convention>(units: &[C::Unit]) -> bool {
    let relative = find_relative_path::<C>(units);
    !relative.is_empty()
        && units
            .last()
            .is_some_and(|&unit| C::is_directory_separator(unit))
}

/// Size of the parent path
///
/// The filename and the separators before it are dropped. A trailing
/// separator is not a filename by itself, so `"foo/"` has parent `"foo"`.
/// The root directory survives when a filename was stripped (`"/foo"` has
/// parent `"/"`), but a bare root has an empty parent.
pub fn find_parent_path_size<C: Convention>(units: &[C::Unit]) -> usize {
    let root_name_size = C::root_name_size(units);
    let root_directory = find_root_directory::<C>(units);
    let filename_size = find_filename_size::<C>(units);

    let mut end = units.len() - filename_size;
    loop {
        if end <= root_name_size {
            if filename_size == 0 {
                end = 0;
            }
            break;
        }
        end -= 1;
        if !C::is_directory_separator(units[end]) {
            end += 1;
            break;
        }
        if !root_directory.is_empty() && end == root_directory.start {
            if filename_size > 0 {
                end += 1;
            }
            break;
        }
    }
    end
}

/// Locate the filename under the given generation
///
/// - v4: the trailing separator-free run of the relative path; empty when the
///   relative path is empty or ends in a separator.
/// - v3: a relative path ending in a separator reports an implicit `"."`; a
///   path with an empty relative path reports the whole buffer.
pub fn find_filename<C: Convention>(units: &[C::Unit], generation: Generation) -> FilenameSpan {
    let end = units.len();
    let relative = find_relative_path::<C>(units);
    match generation {
        Generation::V4 => FilenameSpan::Span(end - find_filename_size::<C>(units)..end),
        Generation::V3 if relative.is_empty() => FilenameSpan::Span(0..end),
        Generation::V3 if has_trailing_separator::<C>(units) => FilenameSpan::ImplicitDot,
        Generation::V3 => FilenameSpan::Span(end - find_filename_size::<C>(units)..end),
    }
}

/// Position of the dot that starts the extension of `filename`
///
/// `"."`, `".."` and names whose only dot is the first character have no
/// extension.
pub fn find_extension<U: CodeUnit>(filename: &[U]) -> Option<usize> {
    if filename == [U::DOT] || filename == [U::DOT, U::DOT] {
        return None;
    }
    match filename.iter().rposition(|&unit| unit == U::DOT) {
        Some(0) | None => None,
        Some(pos) => Some(pos),
    }
}

/// Position of the first directory separator in `units`, or its length
pub(crate) fn find_separator<C: Convention>(units: &[C::Unit]) -> usize {
    units
        .iter()
        .position(|&unit| C::is_directory_separator(unit))
        .unwrap_or(units.len())
}

/// Root-name grammar of the dual-separator convention
///
/// Recognized, in order: a bare `//`; the `\\?\`, `\\.\` and `\??\`
/// namespace prefixes (optionally followed by a drive); `//host`; a drive
/// letter or device name terminated by `:`. Three leading separators are a
/// root directory with redundant separators, not a root name.
pub(crate) fn dual_separator_root_name_size<U: CodeUnit>(units: &[U]) -> usize {
    let is_sep = |unit: U| unit == U::SLASH || unit == U::BACKSLASH;
    let next_sep = |from: usize| {
        from + units[from..]
            .iter()
            .position(|&unit| is_sep(unit))
            .unwrap_or(units.len() - from)
    };
    let size = units.len();
    let mut pos = 0;
    let mut namespace = false;

    if size >= 1 && is_sep(units[0]) {
        if size >= 2 && is_sep(units[1]) {
            if size == 2 {
                return 2;
            }
            if size >= 4 && (units[2] == U::QUESTION || units[2] == U::DOT) && is_sep(units[3]) {
                pos = 4;
                namespace = true;
            } else if is_sep(units[2]) {
                return 0;
            } else {
                return next_sep(2);
            }
        } else if size >= 4
            && units[1] == U::QUESTION
            && units[2] == U::QUESTION
            && is_sep(units[3])
        {
            pos = 4;
            namespace = true;
        } else {
            return 0;
        }
    }

    if size - pos >= 2 && units[pos].is_ascii_alphabetic() {
        let colon = units[pos + 1..]
            .iter()
            .position(|&unit| !unit.is_device_name_char())
            .map(|offset| pos + 1 + offset);
        if let Some(colon) = colon {
            if units[colon] == U::COLON {
                return colon + 1;
            }
        }
    }

    if namespace {
        next_sep(pos)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::{Posix, Windows};

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn win_spans(s: &str) -> Spans {
        spans::<Windows>(&wide(s))
    }

    #[test]
    fn test_posix_spans() {
        let s = spans::<Posix>(b"/foo/bar");
        assert_eq!(s.root_name, 0..0);
        assert_eq!(s.root_directory, 0..1);
        assert_eq!(s.relative_path, 1..8);

        let s = spans::<Posix>(b"///foo");
        assert_eq!(s.root_directory, 0..3);
        assert_eq!(s.relative_path, 3..6);

        let s = spans::<Posix>(b"");
        assert_eq!(s.root_path(), 0..0);
        assert_eq!(s.relative_path, 0..0);

        // No root names under the single-separator convention
        let s = spans::<Posix>(b"//host/share");
        assert_eq!(s.root_name, 0..0);
        assert_eq!(s.root_directory, 0..2);
    }

    #[test]
    fn test_windows_root_names() {
        let cases: &[(&str, usize)] = &[
            ("", 0),
            ("c:", 2),
            ("c:foo", 2),
            (r"c:\foo", 2),
            ("prn:", 4),
            ("com1:", 5),
            ("foo", 0),
            ("//", 2),
            ("//host", 6),
            (r"\\host\share", 6),
            ("///foo", 0),
            (r"\foo", 0),
            (r"\\?\c:\foo", 6),
            (r"\\?\UNC\server\share", 7),
            (r"\\.\pipe\name", 8),
            (r"\??\c:\foo", 6),
            ("/c:", 0),
        ];
        for &(input, expected) in cases {
            assert_eq!(
                find_root_name_size::<Windows>(&wide(input)),
                expected,
                "root name size of {input:?}"
            );
        }
    }

    #[test]
    fn test_windows_spans() {
        let s = win_spans("//host");
        assert_eq!(s.root_name, 0..6);
        assert_eq!(s.root_directory, 6..6);

        let s = win_spans(r"//host/share\x");
        assert_eq!(s.root_directory, 6..7);
        assert_eq!(s.relative_path, 7..14);

        let s = win_spans("c:");
        assert_eq!(s.root_name, 0..2);
        assert!(s.root_directory.is_empty());
        assert!(s.relative_path.is_empty());
    }

    #[test]
    fn test_parent_path_size() {
        let cases: &[(&[u8], usize)] = &[
            (b"", 0),
            (b"/", 0),
            (b"foo", 0),
            (b"/foo", 1),
            (b"///foo", 1),
            (b"foo/bar", 3),
            (b"foo//bar", 3),
            (b"foo/", 3),
            (b"/foo/", 4),
            (b".", 0),
            (b"..", 0),
        ];
        for &(input, expected) in cases {
            assert_eq!(
                find_parent_path_size::<Posix>(input),
                expected,
                "parent of {:?}",
                String::from_utf8_lossy(input)
            );
        }

        assert_eq!(find_parent_path_size::<Windows>(&wide("c:foo")), 2);
        assert_eq!(find_parent_path_size::<Windows>(&wide("c:")), 0);
        assert_eq!(find_parent_path_size::<Windows>(&wide(r"c:\foo")), 3);
        assert_eq!(find_parent_path_size::<Windows>(&wide(r"//host/share")), 7);
    }

    #[test]
    fn test_filename_by_generation() {
        use FilenameSpan::*;

        let cases: &[(&[u8], FilenameSpan, FilenameSpan)] = &[
            (b"", Span(0..0), Span(0..0)),
            (b"/", Span(0..1), Span(1..1)),
            (b".", Span(0..1), Span(0..1)),
            (b"..", Span(0..2), Span(0..2)),
            (b"foo/", ImplicitDot, Span(4..4)),
            (b"/foo/bar.txt", Span(5..12), Span(5..12)),
        ];
        for (input, v3, v4) in cases {
            assert_eq!(&find_filename::<Posix>(input, Generation::V3), v3);
            assert_eq!(&find_filename::<Posix>(input, Generation::V4), v4);
        }

        assert_eq!(
            find_filename::<Windows>(&wide("//host"), Generation::V3),
            Span(0..6)
        );
        assert_eq!(
            find_filename::<Windows>(&wide("c:"), Generation::V3),
            Span(0..2)
        );
        assert_eq!(
            find_filename::<Windows>(&wide("c:"), Generation::V4),
            Span(2..2)
        );
        assert_eq!(
            find_filename::<Windows>(&wide("c:foo"), Generation::V4),
            Span(2..5)
        );
    }

    #[test]
    fn test_find_extension() {
        assert_eq!(find_extension(b"foo.txt"), Some(3));
        assert_eq!(find_extension(b"foo.tar.gz"), Some(7));
        assert_eq!(find_extension(b"foo."), Some(3));
        assert_eq!(find_extension(b".profile"), None);
        assert_eq!(find_extension(b".profile.bak"), Some(8));
        assert_eq!(find_extension(b"."), None);
        assert_eq!(find_extension(b".."), None);
        assert_eq!(find_extension(b"..foo"), Some(1));
        assert_eq!(find_extension(b"noext"), None);
        assert_eq!(find_extension::<u8>(b""), None);
    }

    #[test]
    fn test_trailing_separator() {
        assert!(has_trailing_separator::<Posix>(b"foo/"));
        assert!(has_trailing_separator::<Posix>(b"/foo//"));
        assert!(!has_trailing_separator::<Posix>(b"/"));
        assert!(!has_trailing_separator::<Posix>(b"foo"));
        assert!(!has_trailing_separator::<Windows>(&wide(r"c:\")));
        assert!(has_trailing_separator::<Windows>(&wide(r"c:foo\")));
    }
}

//! Lexical normalization
//!
//! Works on the element sequence alone and never consults a filesystem, so
//! `"a/symlink/.."` normalizes to `"a"` whatever `symlink` points at.

use crate::convention::{CodeUnit, Convention};
use crate::generation::Generation;
use crate::iter::{Element, ElementKind};
use crate::path::Path;

impl<C: Convention> Path<C> {
    /// Collapse `.` and `name/..` elements and separator runs
    ///
    /// Root elements are kept and written with the preferred separator. A
    /// `..` removes the name before it, but is kept when nothing removable
    /// precedes it (leading `..` runs and `..` right after a root). An empty
    /// result becomes `"."`.
    ///
    /// The generations differ in how the end of the path is written. v4 ends
    /// the result in a separator when the input ended in one, or when the last
    /// element processed was a removed `.` or `..`. v3 keeps a final `.`
    /// element (explicit or implied by a trailing separator) instead.
    ///
    /// # Examples
    /// ```
    /// use lexical_path::{Generation, PosixPath, WindowsPath};
    ///
    /// let path = PosixPath::from("foo/./bar/..");
    /// assert_eq!(path.lexically_normal(Generation::V4), "foo/");
    /// assert_eq!(path.lexically_normal(Generation::V3), "foo");
    ///
    /// let path = PosixPath::from("../a/../../b//");
    /// assert_eq!(path.lexically_normal(Generation::V4), "../../b/");
    ///
    /// let path = WindowsPath::from("c:/x/./y/");
    /// assert_eq!(path.lexically_normal(Generation::V3), r"c:\x\y\.");
    /// ```
    pub fn lexically_normal(&self, generation: Generation) -> Self {
        if self.is_empty() {
            return Self::new();
        }

        let mut root = Vec::new();
        let mut names: Vec<Element<'_, C>> = Vec::new();
        let mut trailing = false;

        let mut elements = self.iter(generation).peekable();
        while let Some(element) = elements.next() {
            match element.kind() {
                ElementKind::RootName => {
                    root.extend(element.units().iter().map(|&unit| preferred::<C>(unit)));
                }
                ElementKind::RootDirectory => root.push(C::PREFERRED_SEPARATOR),
                ElementKind::CurDir => match generation {
                    Generation::V4 => trailing = true,
                    Generation::V3 => {
                        if elements.peek().is_none() {
                            names.push(element);
                        }
                    }
                },
                ElementKind::ParentDir => {
                    if names
                        .last()
                        .is_some_and(|top| top.kind() == ElementKind::Normal)
                    {
                        names.pop();
                        trailing = true;
                    } else {
                        names.push(element);
                        trailing = false;
                    }
                }
                ElementKind::Normal => {
                    names.push(element);
                    trailing = false;
                }
            }
        }

        if generation == Generation::V4 && self.has_trailing_separator() {
            trailing = true;
        }

        let mut normal = root;
        for (index, name) in names.iter().enumerate() {
            if index > 0 {
                normal.push(C::PREFERRED_SEPARATOR);
            }
            normal.extend_from_slice(name.units());
        }
        if generation == Generation::V4 && trailing && !names.is_empty() {
            normal.push(C::PREFERRED_SEPARATOR);
        }
        if normal.is_empty() {
            normal.extend_from_slice(<C::Unit as CodeUnit>::DOT_ELEMENT);
        }

        log::trace!("Normalized {:?} under {}", self, generation);
        Self::from_vec(normal)
    }
}

fn preferred<C: Convention>(unit: C::Unit) -> C::Unit {
    if C::is_directory_separator(unit) {
        C::PREFERRED_SEPARATOR
    } else {
        unit
    }
}

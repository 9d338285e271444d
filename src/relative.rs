//! Lexical relativization

use crate::convention::{CodeUnit, Convention};
use crate::generation::Generation;
use crate::iter::ElementKind;
use crate::path::Path;

impl<C: Convention> Path<C> {
    /// The path that leads from `base` to `self`, without touching a filesystem
    ///
    /// Both paths are walked element by element (v4 elements, roots
    /// included) until they differ. The result is empty when the paths
    /// share no leading element, when a root element is left unmatched on
    /// either side, or when `base` climbs out through `..` elements further
    /// than its names allow. Otherwise it is one `..` per name left in
    /// `base` followed by the rest of `self`, or `"."` when nothing is left.
    ///
    /// # Examples
    /// ```
    /// use lexical_path::PosixPath;
    ///
    /// let path = PosixPath::from("/a/d");
    /// assert_eq!(path.lexically_relative(&PosixPath::from("/a/b/c")), "../../d");
    /// assert_eq!(path.lexically_relative(&PosixPath::from("/a/d")), ".");
    /// assert!(path.lexically_relative(&PosixPath::from("a")).is_empty());
    /// ```
    pub fn lexically_relative(&self, base: &Self) -> Self {
        let mut target = self.iter(Generation::V4);
        let mut rest = base.iter(Generation::V4);
        let mut matched = 0;
        loop {
            let (mut next_target, mut next_rest) = (target.clone(), rest.clone());
            match (next_target.next(), next_rest.next()) {
                (Some(a), Some(b)) if a == b => {
                    target = next_target;
                    rest = next_rest;
                    matched += 1;
                }
                _ => break,
            }
        }

        let mut peek_target = target.clone();
        let mut peek_rest = rest.clone();
        let (first_target, first_rest) = (peek_target.next(), peek_rest.next());
        if first_target.is_none() && first_rest.is_none() {
            return Self::from(<C::Unit as CodeUnit>::DOT_ELEMENT);
        }
        if matched == 0 {
            return Self::new();
        }
        if first_target.is_some_and(|element| element.is_root())
            || first_rest.is_some_and(|element| element.is_root())
        {
            return Self::new();
        }

        let mut climb: isize = 0;
        for element in rest {
            match element.kind() {
                ElementKind::ParentDir => climb -= 1,
                ElementKind::CurDir => {}
                _ => climb += 1,
            }
        }
        if climb < 0 {
            return Self::new();
        }
        if climb == 0 && first_target.is_none() {
            return Self::from(<C::Unit as CodeUnit>::DOT_ELEMENT);
        }

        let dot = <C::Unit as CodeUnit>::DOT;
        let mut relative = Self::new();
        for _ in 0..climb {
            relative.append(&[dot, dot], Generation::V4);
        }
        for element in target {
            relative.append(&element, Generation::V4);
        }
        relative
    }

    /// [`lexically_relative`](Self::lexically_relative), or `self` unchanged when that is empty
    pub fn lexically_proximate(&self, base: &Self) -> Self {
        let relative = self.lexically_relative(base);
        if relative.is_empty() {
            self.clone()
        } else {
            relative
        }
    }
}

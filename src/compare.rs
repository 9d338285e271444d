//! Element-wise ordering, equality and hashing
//!
//! Paths compare by their v3 element sequence, where a trailing separator
//! is the implicit `"."` element. `"foo/"` equals `"foo/."` and `"foo//"`,
//! and still differs from `"foo"`. Under the dual-separator convention `/`
//! and `\` compare equal wherever they appear.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::convention::Convention;
use crate::generation::Generation;
use crate::path::Path;

impl<C: Convention> Path<C> {
    /// Three-way element-wise comparison
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use lexical_path::PosixPath;
    ///
    /// assert_eq!(PosixPath::from("a//b").compare(&PosixPath::from("a/b")), Ordering::Equal);
    /// assert_eq!(PosixPath::from("a/b").compare(&PosixPath::from("a/c")), Ordering::Less);
    /// assert_eq!(PosixPath::from("a/").compare(&PosixPath::from("a")), Ordering::Greater);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        self.iter(Generation::V3).cmp(other.iter(Generation::V3))
    }
}

impl<C: Convention> PartialEq for Path<C> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<C: Convention> Eq for Path<C> {}

impl<C: Convention> PartialOrd for Path<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<C: Convention> Ord for Path<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<C: Convention> Hash for Path<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self.iter(Generation::V3) {
            element.hash(state);
        }
    }
}

impl<C: Convention> PartialEq<str> for Path<C>
where
    str: crate::source::PathSource<C::Unit>,
{
    fn eq(&self, other: &str) -> bool {
        *self == Path::<C>::from(other)
    }
}

impl<C: Convention> PartialEq<&str> for Path<C>
where
    str: crate::source::PathSource<C::Unit>,
{
    fn eq(&self, other: &&str) -> bool {
        *self == Path::<C>::from(*other)
    }
}

impl<C: Convention> PartialEq<Path<C>> for &str
where
    str: crate::source::PathSource<C::Unit>,
{
    fn eq(&self, other: &Path<C>) -> bool {
        other == self
    }
}

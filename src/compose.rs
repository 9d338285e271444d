//! Composition: assign, concat and append
//!
//! `concat` (`+=`) is plain concatenation. `append` (`/=`, `/`) joins with a
//! separator, following the rules of the requested generation.

use std::ops::{AddAssign, Div, DivAssign};

use crate::convention::{units_equal, Convention};
use crate::decompose;
use crate::generation::Generation;
use crate::path::Path;
use crate::source::PathSource;

impl<C: Convention> Path<C> {
    /// Replace the contents with `source`
    pub fn assign<S>(&mut self, source: &S) -> &mut Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        let units = source.units();
        let native = self.native_mut();
        native.clear();
        native.extend_from_slice(&units);
        self
    }

    /// Append `source` without any separator logic
    pub fn concat<S>(&mut self, source: &S) -> &mut Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        let units = source.units();
        self.native_mut().extend_from_slice(&units);
        self
    }

    /// Append `source` as a new element
    ///
    /// Both generations insert the preferred separator between the two
    /// parts unless the path is empty, already ends in a separator, ends in
    /// a drive colon, or the operand is empty or starts with a separator. A
    /// separator run where both sides meet collapses to the path's own
    /// separator.
    ///
    /// v4 first checks the operand's root: an absolute operand, or one whose
    /// root name differs from the path's, replaces the path entirely, and an
    /// operand with a root directory but no root name keeps only the path's
    /// root name.
    ///
    /// # Examples
    /// ```
    /// use lexical_path::{Generation, PosixPath, WindowsPath};
    ///
    /// let mut path = PosixPath::from("foo");
    /// path.append("/bar", Generation::V3);
    /// assert_eq!(path, "foo/bar");
    /// path.append("/baz", Generation::V4);
    /// assert_eq!(path, "/baz");
    ///
    /// let mut path = WindowsPath::from(r"c:\src");
    /// path.append("d:lib", Generation::V4);
    /// assert_eq!(path, "d:lib");
    /// ```
    pub fn append<S>(&mut self, source: &S, generation: Generation) -> &mut Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        let operand = source.units();
        match generation {
            Generation::V3 => self.append_v3(&operand),
            Generation::V4 => self.append_v4(&operand),
        }
        self
    }

    /// A copy of the path with `source` appended
    pub fn join<S>(&self, source: &S, generation: Generation) -> Self
    where
        S: PathSource<C::Unit> + ?Sized,
    {
        let mut joined = self.clone();
        joined.append(source, generation);
        joined
    }

    fn append_v3(&mut self, operand: &[C::Unit]) {
        if !operand.is_empty() {
            self.append_with_separator(operand);
        }
    }

    fn append_v4(&mut self, operand: &[C::Unit]) {
        if operand.is_empty() {
            return;
        }

        let operand_root_name = decompose::find_root_name_size::<C>(operand);
        let operand_rooted = !decompose::find_root_directory::<C>(operand).is_empty();
        let operand_absolute =
            operand_rooted && (operand_root_name > 0 || !C::ABSOLUTE_NEEDS_ROOT_NAME);
        if operand_absolute {
            log::trace!("Absolute operand replaces {:?}", self);
            self.assign(operand);
            return;
        }

        let root_name = decompose::find_root_name_size::<C>(self.native());
        if operand_root_name > 0
            && !units_equal::<C>(&self.native()[..root_name], &operand[..operand_root_name])
        {
            log::trace!("Operand with another root name replaces {:?}", self);
            self.assign(operand);
            return;
        }

        let rest = &operand[operand_root_name..];
        if operand_rooted {
            let native = self.native_mut();
            native.truncate(root_name);
            native.extend_from_slice(rest);
        } else if !rest.is_empty() {
            self.append_with_separator(rest);
        }
    }

    fn append_with_separator(&mut self, operand: &[C::Unit]) {
        let native = self.native_mut();
        match native.last() {
            None => native.extend_from_slice(operand),
            Some(&last) if C::is_directory_separator(last) => {
                let skip = operand
                    .iter()
                    .take_while(|&&unit| C::is_directory_separator(unit))
                    .count();
                native.extend_from_slice(&operand[skip..]);
            }
            // "c:" + "foo" must stay drive-relative
            Some(&last) if C::is_element_separator(last) => native.extend_from_slice(operand),
            Some(_) => {
                if !operand
                    .first()
                    .is_some_and(|&unit| C::is_directory_separator(unit))
                {
                    native.push(C::PREFERRED_SEPARATOR);
                }
                native.extend_from_slice(operand);
            }
        }
    }
}

impl<C, S> DivAssign<&S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit> + ?Sized,
{
    /// v4 append
    fn div_assign(&mut self, source: &S) {
        self.append(source, Generation::V4);
    }
}

impl<C, S> Div<&S> for &Path<C>
where
    C: Convention,
    S: PathSource<C::Unit> + ?Sized,
{
    type Output = Path<C>;

    /// v4 join
    fn div(self, source: &S) -> Path<C> {
        self.join(source, Generation::V4)
    }
}

impl<C, S> Div<&S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit> + ?Sized,
{
    type Output = Path<C>;

    fn div(mut self, source: &S) -> Path<C> {
        self.append(source, Generation::V4);
        self
    }
}

impl<C, S> AddAssign<&S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit> + ?Sized,
{
    fn add_assign(&mut self, source: &S) {
        self.concat(source);
    }
}

impl<C, S> FromIterator<S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit>,
{
    /// Append every item under v4
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut path = Path::new();
        path.extend(iter);
        path
    }
}

impl<C, S> Extend<S> for Path<C>
where
    C: Convention,
    S: PathSource<C::Unit>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for source in iter {
            self.append(&source, Generation::V4);
        }
    }
}

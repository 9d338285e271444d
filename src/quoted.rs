//! Quoted stream representation
//!
//! A path is written as its text between two delimiters, with every
//! delimiter or escape character inside it preceded by the escape
//! character. Reading accepts either that form or a plain token ending at
//! the first whitespace.
//!
//! ```
//! use lexical_path::quoted::{quote, read_quoted, QuoteStyle};
//!
//! let style = QuoteStyle::default();
//! let written = quote(r#"my "docs" & more"#, style);
//! assert_eq!(written, r#""my &"docs&" && more""#);
//!
//! let input = format!("{written} tail");
//! let (text, rest) = read_quoted(&input, style);
//! assert_eq!(text, r#"my "docs" & more"#);
//! assert_eq!(rest, " tail");
//! ```

use std::fmt;

use crate::convention::Convention;
use crate::error::Result;
use crate::path::Path;
use crate::source::PathSource;

/// Delimiter and escape characters of the quoted form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteStyle {
    pub delimiter: char,
    pub escape: char,
}

impl Default for QuoteStyle {
    fn default() -> Self {
        Self {
            delimiter: '"',
            escape: '&',
        }
    }
}

/// Write `text` in quoted form to `out`
pub fn write_quoted<W: fmt::Write>(out: &mut W, text: &str, style: QuoteStyle) -> fmt::Result {
    out.write_char(style.delimiter)?;
    for c in text.chars() {
        if c == style.delimiter || c == style.escape {
            out.write_char(style.escape)?;
        }
        out.write_char(c)?;
    }
    out.write_char(style.delimiter)
}

/// `text` in quoted form
pub fn quote(text: &str, style: QuoteStyle) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    // Writing to a String cannot fail
    let _ = write_quoted(&mut quoted, text, style);
    quoted
}

/// Read one token from `input`, returning its text and the unread remainder
///
/// Leading whitespace is skipped. A token starting with the delimiter runs
/// to the matching unescaped delimiter, or to the end of `input` if there is
/// none. Any other token runs to the next whitespace.
pub fn read_quoted(input: &str, style: QuoteStyle) -> (String, &str) {
    let input = input.trim_start();
    let Some(body) = input.strip_prefix(style.delimiter) else {
        let end = input.find(char::is_whitespace).unwrap_or(input.len());
        return (input[..end].to_string(), &input[end..]);
    };

    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((index, c)) = chars.next() {
        if c == style.escape {
            if let Some((_, escaped)) = chars.next() {
                text.push(escaped);
            }
        } else if c == style.delimiter {
            return (text, &body[index + c.len_utf8()..]);
        } else {
            text.push(c);
        }
    }
    (text, "")
}

impl<C: Convention> Path<C> {
    /// The path's text in the default quoted form
    ///
    /// Fails when the native form is not valid Unicode.
    pub fn to_quoted(&self) -> Result<String> {
        Ok(quote(&self.string()?, QuoteStyle::default()))
    }

    /// Read a path in the default quoted form, returning the unread remainder
    ///
    /// # Examples
    /// ```
    /// use lexical_path::PosixPath;
    ///
    /// let (path, rest) = PosixPath::from_quoted(r#""/srv/my files/" next"#);
    /// assert_eq!(path, "/srv/my files/");
    /// assert_eq!(rest, " next");
    /// ```
    pub fn from_quoted(input: &str) -> (Self, &str)
    where
        str: PathSource<C::Unit>,
    {
        let (text, rest) = read_quoted(input, QuoteStyle::default());
        (Self::from(text.as_str()), rest)
    }
}

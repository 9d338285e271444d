//! Character conversion facets
//!
//! A [`Codecvt`] translates between narrow (byte) and wide (UTF-16) code
//! units. It is only consulted when a path's native unit type differs from
//! the requested one: POSIX paths use it to produce or accept wide text,
//! Windows paths to produce or accept narrow bytes.
//!
//! # Process-wide default
//!
//! Conversions without an explicit facet use the process-wide default,
//! initially [`Utf8Codecvt`]. [`imbue`] replaces it and returns the previous
//! facet. Replacement is not atomic with respect to conversions already
//! running on other threads: a thread that read the old facet keeps using it.
//! Callers that swap the default while other threads convert must
//! synchronize themselves. [`ScopedCodecvt`] swaps for a lexical scope and
//! restores the previous facet on drop.
//!
//! ```
//! use std::sync::Arc;
//! use lexical_path::codecvt::{default_codecvt, Latin1Codecvt, ScopedCodecvt};
//!
//! {
//!     let _guard = ScopedCodecvt::new(Arc::new(Latin1Codecvt));
//!     assert_eq!(default_codecvt().name(), "latin-1");
//! }
//! assert_eq!(default_codecvt().name(), "utf-8");
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{PathError, Result};

/// Conversion between narrow bytes and wide UTF-16 code units
pub trait Codecvt: fmt::Debug + Send + Sync {
    /// Name used in errors and log messages
    fn name(&self) -> &str;

    /// Decode narrow bytes into UTF-16
    fn narrow_to_wide(&self, narrow: &[u8]) -> Result<Vec<u16>>;

    /// Encode UTF-16 into narrow bytes
    fn wide_to_narrow(&self, wide: &[u16]) -> Result<Vec<u8>>;
}

/// UTF-8 narrow encoding; rejects malformed input in either direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Codecvt;

impl Codecvt for Utf8Codecvt {
    fn name(&self) -> &str {
        "utf-8"
    }

    fn narrow_to_wide(&self, narrow: &[u8]) -> Result<Vec<u16>> {
        let text = std::str::from_utf8(narrow).map_err(|err| PathError::InvalidSequence {
            codecvt: self.name().to_string(),
            position: err.valid_up_to(),
        })?;
        Ok(text.encode_utf16().collect())
    }

    fn wide_to_narrow(&self, wide: &[u16]) -> Result<Vec<u8>> {
        decode_utf16(wide, self.name()).map(String::into_bytes)
    }
}

/// ISO-8859-1 narrow encoding: bytes map one-to-one onto U+0000..=U+00FF
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latin1Codecvt;

impl Codecvt for Latin1Codecvt {
    fn name(&self) -> &str {
        "latin-1"
    }

    fn narrow_to_wide(&self, narrow: &[u8]) -> Result<Vec<u16>> {
        Ok(narrow.iter().map(|&byte| u16::from(byte)).collect())
    }

    fn wide_to_narrow(&self, wide: &[u16]) -> Result<Vec<u8>> {
        let mut narrow = Vec::with_capacity(wide.len());
        for c in decode_utf16(wide, self.name())?.chars() {
            let byte = u8::try_from(u32::from(c)).map_err(|_| PathError::Unmappable {
                codecvt: self.name().to_string(),
                code_point: u32::from(c),
            })?;
            narrow.push(byte);
        }
        Ok(narrow)
    }
}

/// Strict UTF-16 decoding; unpaired surrogates are invalid sequences
pub(crate) fn decode_utf16(wide: &[u16], codecvt: &str) -> Result<String> {
    let mut text = String::with_capacity(wide.len());
    let mut position = 0;
    for decoded in char::decode_utf16(wide.iter().copied()) {
        let c = decoded.map_err(|_| PathError::InvalidSequence {
            codecvt: codecvt.to_string(),
            position,
        })?;
        position += c.len_utf16();
        text.push(c);
    }
    Ok(text)
}

static DEFAULT_CODECVT: RwLock<Option<Arc<dyn Codecvt>>> = RwLock::new(None);

/// The facet used by conversions that are not given one explicitly
pub fn default_codecvt() -> Arc<dyn Codecvt> {
    let current = DEFAULT_CODECVT
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    current.clone().unwrap_or_else(|| Arc::new(Utf8Codecvt))
}

/// Replace the process-wide default facet, returning the previous one
///
/// See the [module documentation](self) for the concurrency contract.
pub fn imbue(codecvt: Arc<dyn Codecvt>) -> Arc<dyn Codecvt> {
    let mut current = DEFAULT_CODECVT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    log::debug!("Imbuing default codecvt: {}", codecvt.name());
    current
        .replace(codecvt)
        .unwrap_or_else(|| Arc::new(Utf8Codecvt))
}

/// Scoped override of the process-wide default facet
///
/// The previous default is restored when the guard is dropped.
#[must_use = "the previous codecvt is restored as soon as the guard is dropped"]
pub struct ScopedCodecvt {
    previous: Option<Arc<dyn Codecvt>>,
}

impl ScopedCodecvt {
    /// Install `codecvt` as the default until the guard is dropped
    pub fn new(codecvt: Arc<dyn Codecvt>) -> Self {
        Self {
            previous: Some(imbue(codecvt)),
        }
    }
}

impl Drop for ScopedCodecvt {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            log::debug!("Restoring default codecvt: {}", previous.name());
            imbue(previous);
        }
    }
}

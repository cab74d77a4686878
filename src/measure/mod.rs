//! Encoded size measurement.
//!
//! A cookie store enforces its limit on the *encoded* entry, not on the raw
//! string. [`Measure`] tells the splitter how the transport encodes a piece so
//! that its size arithmetic uses the same units.
//!
//! - [`Measure`] - Size of a name's overhead and of one code point
//! - [`PercentEncoded`] - Percent-encoded value length (default)
//! - [`PercentEncodedEntry`] - Percent-encoded `name=value` length
//! - [`Utf8Bytes`] - Raw UTF-8 byte length of the value

mod percent;

pub use percent::{PercentEncoded, PercentEncodedEntry};

/// Encoded size of a candidate piece.
///
/// The size of a piece is `overhead(name)` plus the sum of `char_len` over
/// the code points of its value. Keeping the measure additive lets the
/// splitter grow a piece one code point at a time without re-encoding it.
pub trait Measure {
    /// Size contributed by the piece name and any separator.
    fn overhead(&self, name: &str) -> usize;

    /// Encoded size of a single code point of the value.
    fn char_len(&self, c: char) -> usize;

    /// Encoded size of the whole entry `(name, value)`.
    fn encoded_len(&self, name: &str, value: &str) -> usize {
        self.overhead(name) + value.chars().map(|c| self.char_len(c)).sum::<usize>()
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn overhead(&self, name: &str) -> usize {
        (**self).overhead(name)
    }

    fn char_len(&self, c: char) -> usize {
        (**self).char_len(c)
    }
}

/// Measures the raw UTF-8 byte length of the value.
///
/// For stores that keep bytes verbatim (header maps, key-value stores).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Bytes;

impl Measure for Utf8Bytes {
    fn overhead(&self, _name: &str) -> usize {
        0
    }

    fn char_len(&self, c: char) -> usize {
        c.len_utf8()
    }
}

//! Percent-encoding measures.
//!
//! Cookies are commonly written with `encodeURIComponent`-style escaping:
//! unreserved characters pass through and every other UTF-8 byte becomes a
//! three-character `%XX` triplet.

use super::Measure;

/// Returns true for characters `encodeURIComponent` leaves untouched.
fn is_unreserved(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '0'..='9'
        | '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

/// Length of one code point after percent-encoding.
fn percent_len(c: char) -> usize {
    if is_unreserved(c) { 1 } else { 3 * c.len_utf8() }
}

/// Measures the percent-encoded length of the value only.
///
/// This is the default measure. The name is not counted, so the configured
/// limit is a budget for the value itself.
///
/// # Example
///
/// ```
/// use cookie_chunker::{Measure, PercentEncoded};
///
/// assert_eq!(PercentEncoded.encoded_len("session", "a b"), 5);
/// assert_eq!(PercentEncoded.encoded_len("session", "🤦"), 12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentEncoded;

impl Measure for PercentEncoded {
    fn overhead(&self, _name: &str) -> usize {
        0
    }

    fn char_len(&self, c: char) -> usize {
        percent_len(c)
    }
}

/// Measures the percent-encoded length of the full `name=value` entry.
///
/// Use this when the limit applies to the serialized cookie pair rather than
/// to the value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentEncodedEntry;

impl Measure for PercentEncodedEntry {
    fn overhead(&self, name: &str) -> usize {
        // name plus '='
        name.chars().map(percent_len).sum::<usize>() + 1
    }

    fn char_len(&self, c: char) -> usize {
        percent_len(c)
    }
}

//! Piece naming: `<base>` or `<base>.<index>`.

use std::collections::HashSet;
use std::fmt;

use super::Piece;

/// Formats the name of the piece at `index` for `base`.
pub(crate) fn piece_name(base: &str, index: usize) -> String {
    format!("{}.{}", base, index)
}

/// A piece name split into its base name and optional index.
///
/// The index suffix must be `0` or a decimal number without leading zeros.
/// Anything else is part of the base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceName<'a> {
    /// The base name.
    pub base: &'a str,
    /// The index, or `None` for a bare name.
    pub index: Option<usize>,
}

impl<'a> PieceName<'a> {
    /// Parses a stored name.
    ///
    /// # Example
    ///
    /// ```
    /// use cookie_chunker::PieceName;
    ///
    /// let name = PieceName::parse("sb-auth-token.2");
    /// assert_eq!(name.base, "sb-auth-token");
    /// assert_eq!(name.index, Some(2));
    ///
    /// assert_eq!(PieceName::parse("v1.05").index, None);
    /// ```
    pub fn parse(name: &'a str) -> Self {
        let bare = Self {
            base: name,
            index: None,
        };

        let Some((base, suffix)) = name.rsplit_once('.') else {
            return bare;
        };

        let digits_only = !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || (suffix.len() > 1 && suffix.starts_with('0')) {
            return bare;
        }

        match suffix.parse() {
            Ok(index) => Self {
                base,
                index: Some(index),
            },
            Err(_) => bare,
        }
    }
}

impl fmt::Display for PieceName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}.{}", self.base, index),
            None => f.write_str(self.base),
        }
    }
}

/// Returns true if `name` is `base` itself or `base.<index>`.
///
/// ```
/// use cookie_chunker::is_piece_of;
///
/// assert!(is_piece_of("session", "session"));
/// assert!(is_piece_of("session.4", "session"));
/// assert!(!is_piece_of("session.x", "session"));
/// assert!(!is_piece_of("sessions.0", "session"));
/// ```
pub fn is_piece_of(name: &str, base: &str) -> bool {
    if name == base {
        return true;
    }
    let parsed = PieceName::parse(name);
    parsed.index.is_some() && parsed.base == base
}

/// Returns the names in `existing` that belong to `base` but were not written.
///
/// After writing `written` (the output of a split), every name returned here
/// is an orphan from an earlier generation and can be deleted from the store.
/// Order follows `existing`.
///
/// # Example
///
/// ```
/// use cookie_chunker::{split_with, stale_piece_names};
///
/// let written = split_with("key", "   ", 4)?;
/// let existing = ["key", "key.0", "key.5", "other.1"];
///
/// assert_eq!(stale_piece_names("key", existing, &written), ["key", "key.5"]);
/// # Ok::<(), cookie_chunker::SplitError>(())
/// ```
pub fn stale_piece_names<'a, I>(base: &str, existing: I, written: &[Piece]) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let written: HashSet<&str> = written.iter().map(Piece::name).collect();

    existing
        .into_iter()
        .filter(|name| is_piece_of(name, base) && !written.contains(name))
        .collect()
}

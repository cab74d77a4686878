//! The Piece type - one named, size-bounded fragment of a value.

use std::fmt;

use super::PieceName;

/// A named fragment of a split value.
///
/// # Example
///
/// ```
/// use cookie_chunker::Piece;
///
/// let piece = Piece::new("session.0", "eyJhbGciOi");
///
/// assert_eq!(piece.index(), Some(0));
/// assert!(!piece.is_sentinel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The name the piece is stored under.
    pub name: String,

    /// The fragment of the original value (empty for a sentinel).
    pub value: String,
}

impl Piece {
    /// Creates a new piece.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the piece name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the piece value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the index suffix of the name, if it has one.
    pub fn index(&self) -> Option<usize> {
        PieceName::parse(&self.name).index
    }

    /// Returns true if this is an indexed piece with an empty value.
    ///
    /// A bare piece holding an empty value is not a sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty() && self.index().is_some()
    }

    /// Consumes the piece and returns `(name, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

impl From<(String, String)> for Piece {
    fn from((name, value): (String, String)) -> Self {
        Self { name, value }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

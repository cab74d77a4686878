//! Reassembling values from stored pieces.
//!
//! - [`Lookup`] - Synchronous read access to the store
//! - [`PieceIter`] - Iterator over the data-bearing pieces of a value
//! - [`combine`] - Concatenates the pieces back into the value
//!
//! # Termination
//!
//! Indexed pieces are read in ascending order and reading stops at the first
//! absent piece or the first empty one (the sentinel). Anything stored past
//! the sentinel belongs to an older, longer write and is never consulted.

mod iter;

pub use iter::PieceIter;

use tracing::{debug, trace};

use crate::piece::{Piece, piece_name};

/// Read access to the store holding the pieces.
///
/// Returns `Ok(None)` for an absent name. Errors are reserved for failures of
/// the store itself and are passed to the caller unchanged.
///
/// Implemented for any `FnMut(&str) -> Result<Option<String>, E>`.
pub trait Lookup {
    /// The error reported by the store.
    type Error;

    /// Looks up the value stored under `name`.
    fn lookup(&mut self, name: &str) -> Result<Option<String>, Self::Error>;
}

impl<F, E> Lookup for F
where
    F: FnMut(&str) -> Result<Option<String>, E>,
{
    type Error = E;

    fn lookup(&mut self, name: &str) -> Result<Option<String>, E> {
        self(name)
    }
}

/// Position of the reassembler within a piece sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cursor {
    Bare,
    Index(usize),
    Done,
}

/// Outcome of applying one lookup result to the cursor.
#[derive(Debug)]
pub(crate) enum Step {
    Yield(Piece),
    Skip,
    End,
}

impl Cursor {
    /// Name to look up next, or `None` once the sequence has ended.
    pub(crate) fn name(self, base: &str) -> Option<String> {
        match self {
            Cursor::Bare => Some(base.to_string()),
            Cursor::Index(index) => Some(piece_name(base, index)),
            Cursor::Done => None,
        }
    }

    /// Applies the lookup result for `name` and moves to the next position.
    pub(crate) fn advance(&mut self, name: String, found: Option<String>) -> Step {
        match (*self, found) {
            (Cursor::Bare, Some(value)) => {
                trace!(%name, "found unchunked value");
                *self = Cursor::Done;
                Step::Yield(Piece::new(name, value))
            }
            (Cursor::Bare, None) => {
                *self = Cursor::Index(0);
                Step::Skip
            }
            (Cursor::Index(index), Some(value)) if !value.is_empty() => {
                *self = Cursor::Index(index + 1);
                Step::Yield(Piece::new(name, value))
            }
            (Cursor::Index(_), Some(_)) => {
                trace!(%name, "reached sentinel");
                *self = Cursor::Done;
                Step::End
            }
            (Cursor::Index(_), None) => {
                trace!(%name, "piece absent, sequence ends");
                *self = Cursor::Done;
                Step::End
            }
            (Cursor::Done, _) => Step::End,
        }
    }
}

/// Appends pieces to a value that stays `None` until the first piece.
#[derive(Debug, Default)]
pub(crate) struct Assembled {
    value: Option<String>,
    pieces: usize,
}

impl Assembled {
    pub(crate) fn push(&mut self, piece: &Piece) {
        self.value.get_or_insert_with(String::new).push_str(&piece.value);
        self.pieces += 1;
    }

    pub(crate) fn finish(self, base: &str) -> Option<String> {
        match &self.value {
            Some(value) => debug!(base, pieces = self.pieces, len = value.len(), "combined value"),
            None => debug!(base, "no stored value"),
        }
        self.value
    }
}

/// Iterates the data-bearing pieces stored under `base`.
///
/// The sentinel is not yielded. After an error the iterator is exhausted.
pub fn pieces<L: Lookup>(base: &str, lookup: L) -> PieceIter<L> {
    PieceIter::new(base, lookup)
}

/// Reassembles the value stored under `base`.
///
/// Returns `Ok(None)` when neither the bare name nor any indexed piece holds
/// data.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::convert::Infallible;
///
/// let store: HashMap<String, String> = cookie_chunker::split_with("key", "   ", 4)?
///     .into_iter()
///     .map(|piece| piece.into_parts())
///     .collect();
///
/// let value = cookie_chunker::combine("key", |name: &str| {
///     Ok::<_, Infallible>(store.get(name).cloned())
/// });
/// assert_eq!(value, Ok(Some("   ".to_string())));
/// # Ok::<(), cookie_chunker::SplitError>(())
/// ```
pub fn combine<L: Lookup>(base: &str, lookup: L) -> Result<Option<String>, L::Error> {
    let mut assembled = Assembled::default();
    for piece in pieces(base, lookup) {
        assembled.push(&piece?);
    }
    Ok(assembled.finish(base))
}

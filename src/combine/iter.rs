//! Synchronous piece iterator - PieceIter.

use std::iter::FusedIterator;

use tracing::trace;

use super::{Cursor, Lookup, Step};
use crate::piece::Piece;

/// Iterator over the data-bearing pieces stored under one base name.
///
/// Each call to `next()` issues lookups until it can yield a piece or the
/// sequence ends. Lookups are issued one at a time in ascending index order.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use cookie_chunker::pieces;
///
/// let store = [("key.0", "ab"), ("key.1", "cd"), ("key.2", ""), ("key.3", "stale")];
/// let lookup = |name: &str| {
///     let found = store.iter().find(|(n, _)| *n == name).map(|(_, v)| v.to_string());
///     Ok::<_, Infallible>(found)
/// };
///
/// let values: Vec<_> = pieces("key", lookup).map(|p| p.unwrap().value).collect();
/// assert_eq!(values, ["ab", "cd"]);
/// ```
#[derive(Debug)]
pub struct PieceIter<L> {
    lookup: L,
    base: String,
    cursor: Cursor,
}

impl<L> PieceIter<L> {
    pub(crate) fn new(base: &str, lookup: L) -> Self {
        Self {
            lookup,
            base: base.to_string(),
            cursor: Cursor::Bare,
        }
    }

    /// Returns the base name being read.
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl<L: Lookup> Iterator for PieceIter<L> {
    type Item = Result<Piece, L::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let name = self.cursor.name(&self.base)?;
            trace!(%name, "looking up piece");

            let found = match self.lookup.lookup(&name) {
                Ok(found) => found,
                Err(e) => {
                    self.cursor = Cursor::Done;
                    return Some(Err(e));
                }
            };

            match self.cursor.advance(name, found) {
                Step::Yield(piece) => return Some(Ok(piece)),
                Step::Skip => continue,
                Step::End => return None,
            }
        }
    }
}

impl<L: Lookup> FusedIterator for PieceIter<L> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::convert::Infallible;

    fn store(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bare_value_short_circuits() {
        let store = store(&[("key", "whole"), ("key.0", "stale")]);
        let mut asked = Vec::new();
        let iter = PieceIter::new("key", |name: &str| {
            asked.push(name.to_string());
            Ok::<_, Infallible>(store.get(name).cloned())
        });

        let pieces: Vec<_> = iter.collect::<Result<_, _>>().unwrap();
        assert_eq!(pieces, vec![Piece::new("key", "whole")]);
        assert_eq!(asked, vec!["key"]);
    }

    #[test]
    fn test_stops_at_sentinel_without_reading_further() {
        let store = store(&[("key.0", "a"), ("key.1", ""), ("key.2", "stale")]);
        let mut asked = Vec::new();
        let iter = PieceIter::new("key", |name: &str| {
            asked.push(name.to_string());
            Ok::<_, Infallible>(store.get(name).cloned())
        });

        assert_eq!(iter.count(), 1);
        assert_eq!(asked, vec!["key", "key.0", "key.1"]);
    }

    #[test]
    fn test_error_fuses_iterator() {
        let mut iter = PieceIter::new("key", |name: &str| match name {
            "key" => Ok::<Option<String>, &str>(None),
            _ => Err("store offline"),
        });

        assert_eq!(iter.next(), Some(Err("store offline")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_base() {
        let iter = PieceIter::new("key", |_: &str| Ok::<Option<String>, Infallible>(None));
        assert_eq!(iter.base(), "key");
    }
}

//! Async stream adapter for reassembly.
//!
//! Lookups return futures; each one is awaited before the next name is
//! requested, since whether index `n + 1` is read at all depends on piece `n`.
//! Nothing here depends on a particular runtime.
//!
//! # Example
//!
//! ```ignore
//! use cookie_chunker::combine_async;
//!
//! async fn read(jar: &CookieJar) -> Result<Option<String>, JarError> {
//!     combine_async("session", |name: String| jar.get(name)).await
//! }
//! ```

use std::future::{Future, poll_fn};
use std::mem;
use std::pin::{Pin, pin};
use std::task::{Context, Poll, ready};

use futures_core::Stream;
use pin_project_lite::pin_project;
use tracing::trace;

use crate::combine::{Assembled, Cursor, Step};
use crate::piece::Piece;

/// Asynchronous read access to the store holding the pieces.
///
/// The async counterpart of [`Lookup`](crate::Lookup). Implemented for any
/// `FnMut(String) -> Fut` where `Fut` resolves to
/// `Result<Option<String>, E>`.
pub trait AsyncLookup {
    /// The error reported by the store.
    type Error;

    /// The future returned by [`lookup`](AsyncLookup::lookup).
    type Future: Future<Output = Result<Option<String>, Self::Error>>;

    /// Starts looking up the value stored under `name`.
    fn lookup(&mut self, name: String) -> Self::Future;
}

impl<F, Fut, E> AsyncLookup for F
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Option<String>, E>>,
{
    type Error = E;
    type Future = Fut;

    fn lookup(&mut self, name: String) -> Fut {
        self(name)
    }
}

pin_project! {
    /// A stream of the data-bearing pieces stored under one base name.
    ///
    /// At most one lookup is in flight at any time. The sentinel is not
    /// yielded; after an error the stream ends.
    #[must_use = "streams do nothing unless polled"]
    pub struct PieceStream<L>
    where
        L: AsyncLookup
    {
        lookup: L,
        base: String,
        cursor: Cursor,
        #[pin]
        pending: Pending<L::Future>,
    }
}

pin_project! {
    // An in-flight lookup always carries the name it was issued for.
    #[project = PendingProj]
    enum Pending<F> {
        Idle,
        Lookup {
            name: String,
            #[pin]
            future: F,
        },
    }
}

impl<L: AsyncLookup> PieceStream<L> {
    /// Creates a stream reading the pieces of `base` through `lookup`.
    pub fn new(base: &str, lookup: L) -> Self {
        Self {
            lookup,
            base: base.to_string(),
            cursor: Cursor::Bare,
            pending: Pending::Idle,
        }
    }

    /// Returns the base name being read.
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl<L: AsyncLookup> Stream for PieceStream<L> {
    type Item = Result<Piece, L::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let PendingProj::Lookup { name, future } = this.pending.as_mut().project() {
                let result = ready!(future.poll(cx));
                let name = mem::take(name);
                this.pending.set(Pending::Idle);

                let found = match result {
                    Ok(found) => found,
                    Err(e) => {
                        *this.cursor = Cursor::Done;
                        return Poll::Ready(Some(Err(e)));
                    }
                };

                match this.cursor.advance(name, found) {
                    Step::Yield(piece) => return Poll::Ready(Some(Ok(piece))),
                    Step::Skip => {}
                    Step::End => return Poll::Ready(None),
                }
            }

            let Some(name) = this.cursor.name(this.base) else {
                return Poll::Ready(None);
            };
            trace!(%name, "looking up piece");

            let future = this.lookup.lookup(name.clone());
            this.pending.set(Pending::Lookup { name, future });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Cursor::Done => (0, Some(0)),
            _ => (0, None),
        }
    }
}

/// Creates a stream of the data-bearing pieces stored under `base`.
pub fn pieces_async<L: AsyncLookup>(base: &str, lookup: L) -> PieceStream<L> {
    PieceStream::new(base, lookup)
}

/// Reassembles the value stored under `base` using an async lookup.
///
/// Resolves to `Ok(None)` when nothing is stored. The first lookup error is
/// returned as is.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::convert::Infallible;
/// use cookie_chunker::{combine_async, split_with};
///
/// # tokio_test::block_on(async {
/// let store: HashMap<String, String> = split_with("key", "hello, world", 8)
///     .unwrap()
///     .into_iter()
///     .map(|piece| piece.into_parts())
///     .collect();
///
/// let value = combine_async("key", |name: String| {
///     let found = store.get(&name).cloned();
///     async move { Ok::<_, Infallible>(found) }
/// })
/// .await;
///
/// assert_eq!(value, Ok(Some("hello, world".to_string())));
/// # });
/// ```
pub async fn combine_async<L: AsyncLookup>(
    base: &str,
    lookup: L,
) -> Result<Option<String>, L::Error> {
    let mut stream = pin!(pieces_async(base, lookup));
    let mut assembled = Assembled::default();

    while let Some(piece) = poll_fn(|cx| stream.as_mut().poll_next(cx)).await {
        assembled.push(&piece?);
    }

    Ok(assembled.finish(base))
}

//! cookie-chunker
//!
//! Split oversized string values into size-bounded pieces, and put them back
//! together.
//!
//! Browsers cap a single cookie at roughly 4 KiB, while session tokens and
//! encoded auth state regularly outgrow that. `cookie-chunker` turns one value
//! into a sequence of named pieces that each fit, and reassembles them on the
//! way back in:
//!
//! - `session` for a value that already fits
//! - `session.0`, `session.1`, ... `session.N` otherwise, where the last piece
//!   is an empty sentinel
//!
//! The sentinel makes reads safe against leftovers: when a shorter value
//! overwrites a longer one and the old high-indexed pieces are never deleted,
//! reassembly still stops at the new sentinel.
//!
//! The crate intentionally:
//! - does NOT talk to any cookie jar, header map or storage backend
//! - does NOT manage expiry, domains or paths
//! - does NOT compress or encrypt values
//!
//! It only does one thing: **value → pieces → value**
//!
//! # Sync
//!
//! ```
//! use std::collections::HashMap;
//! use std::convert::Infallible;
//! use cookie_chunker::{combine, split_with};
//!
//! let token = "eyJhbGciOiJIUzI1NiJ9.".repeat(200);
//!
//! let mut jar = HashMap::new();
//! for piece in split_with("sb-auth-token", &token, 3180)? {
//!     jar.insert(piece.name, piece.value);
//! }
//!
//! let value = combine("sb-auth-token", |name: &str| {
//!     Ok::<_, Infallible>(jar.get(name).cloned())
//! });
//! assert_eq!(value, Ok(Some(token)));
//! # Ok::<(), cookie_chunker::SplitError>(())
//! ```
//!
//! # Async (feature = "async")
//!
//! ```ignore
//! use cookie_chunker::combine_async;
//!
//! async fn session(jar: &RemoteJar) -> Result<Option<String>, JarError> {
//!     combine_async("session", |name: String| jar.get(name)).await
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod combine;
mod config;
mod error;
mod measure;
mod piece;
mod splitter;

#[cfg(feature = "async")]
mod async_stream;

//
// Public surface
//

pub use combine::{Lookup, PieceIter, combine, pieces};
pub use config::{DEFAULT_MAX_ENCODED_SIZE, SplitConfig};
pub use error::SplitError;
pub use measure::{Measure, PercentEncoded, PercentEncodedEntry, Utf8Bytes};
pub use piece::{Piece, PieceName, is_piece_of, stale_piece_names};
pub use splitter::{Splitter, split, split_with};

#[cfg(feature = "async")]
pub use async_stream::{AsyncLookup, PieceStream, combine_async, pieces_async};

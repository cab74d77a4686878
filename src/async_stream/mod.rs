//! Async reassembly support.
//!
//! This module mirrors [`combine`](fn@crate::combine) for stores whose reads are
//! asynchronous. It only relies on `std::future::Future` and
//! `futures_core::Stream`, so it runs on tokio, async-std, smol, or any other
//! executor.
//!
//! - [`AsyncLookup`] - Asynchronous read access to the store
//! - [`PieceStream`] - Stream of the data-bearing pieces of a value
//! - [`combine_async`] - Concatenates the pieces back into the value
//!
//! This module requires the `async` feature to be enabled.

mod stream;

pub use stream::{AsyncLookup, PieceStream, combine_async, pieces_async};

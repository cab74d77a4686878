//! Splitting values into pieces.
//!
//! - [`Splitter`] - Configured splitter with an injectable [`Measure`](crate::Measure)
//! - [`split`] / [`split_with`] - One-shot helpers using percent-encoded sizes

mod engine;

pub use engine::Splitter;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::piece::Piece;

/// Splits `value` with the default limit.
///
/// ```
/// let pieces = cookie_chunker::split("my-chunks", "hello-world")?;
/// assert_eq!(pieces.len(), 1);
/// assert_eq!(pieces[0].name(), "my-chunks");
/// # Ok::<(), cookie_chunker::SplitError>(())
/// ```
pub fn split(base: &str, value: &str) -> Result<Vec<Piece>, SplitError> {
    Splitter::new(SplitConfig::default()).split(base, value)
}

/// Splits `value` with a custom maximum encoded size per piece.
pub fn split_with(
    base: &str,
    value: &str,
    max_encoded_size: usize,
) -> Result<Vec<Piece>, SplitError> {
    Splitter::new(SplitConfig::new(max_encoded_size)?).split(base, value)
}

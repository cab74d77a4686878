//! Splitting engine - Splitter.
//!
//! Walks a value one code point at a time and closes a piece whenever the
//! next code point would push its encoded size past the configured limit.
//!
//! # Example
//!
//! ```
//! use cookie_chunker::{SplitConfig, Splitter};
//!
//! let splitter = Splitter::new(SplitConfig::new(4)?);
//! let pieces = splitter.split("key", "   ")?;
//!
//! let names: Vec<_> = pieces.iter().map(|p| p.name()).collect();
//! assert_eq!(names, ["key.0", "key.1", "key.2", "key.3"]);
//! # Ok::<(), cookie_chunker::SplitError>(())
//! ```

use tracing::{debug, trace};

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::measure::{Measure, PercentEncoded};
use crate::piece::{Piece, piece_name};

/// Splits values into size-bounded pieces.
///
/// # Output shape
///
/// - A value that fits (or is empty) comes back as one piece named exactly
///   like the base name.
/// - Otherwise the pieces are named `<base>.0`, `<base>.1`, ... and the last
///   one is always an empty sentinel.
///
/// # Code points
///
/// A piece boundary only ever falls between two code points. Multi-code-point
/// sequences such as emoji with modifiers and joiners may be spread over
/// several pieces, one code point at a time.
#[derive(Debug, Clone)]
pub struct Splitter<M = PercentEncoded> {
    config: SplitConfig,
    measure: M,
}

impl Splitter {
    /// Creates a splitter that measures percent-encoded values.
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            measure: PercentEncoded,
        }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

impl<M: Measure> Splitter<M> {
    /// Creates a splitter with a custom measure.
    ///
    /// ```
    /// use cookie_chunker::{SplitConfig, Splitter, Utf8Bytes};
    ///
    /// let splitter = Splitter::with_measure(SplitConfig::new(2)?, Utf8Bytes);
    /// let pieces = splitter.split("k", "a b")?;
    /// assert_eq!(pieces.len(), 3);
    /// # Ok::<(), cookie_chunker::SplitError>(())
    /// ```
    pub fn with_measure(config: SplitConfig, measure: M) -> Self {
        Self { config, measure }
    }

    /// Splits `value` into pieces stored under `base`.
    ///
    /// # Errors
    ///
    /// - [`SplitError::InvalidConfig`] if the configuration is invalid
    /// - [`SplitError::CodePointTooLarge`] if some code point cannot fit in a
    ///   piece on its own
    pub fn split(&self, base: &str, value: &str) -> Result<Vec<Piece>, SplitError> {
        self.config.validate()?;
        let max = self.config.max_encoded_size();

        let total = self.measure.encoded_len(base, value);
        if value.is_empty() || total <= max {
            trace!(base, total, max, "value fits in a single piece");
            return Ok(vec![Piece::new(base, value)]);
        }

        let mut pieces = Vec::new();
        let mut name = piece_name(base, 0);
        let mut used = self.measure.overhead(&name);
        let mut start = 0;

        for (i, c) in value.char_indices() {
            let len = self.measure.char_len(c);

            if used + len > max {
                if i > start {
                    pieces.push(Piece::new(name, &value[start..i]));
                    name = piece_name(base, pieces.len());
                    used = self.measure.overhead(&name);
                    start = i;
                }

                if used + len > max {
                    return Err(SplitError::CodePointTooLarge {
                        code_point: c,
                        piece: name,
                        required: used + len,
                        max,
                    });
                }
            }

            used += len;
        }

        pieces.push(Piece::new(name, &value[start..]));
        pieces.push(Piece::new(piece_name(base, pieces.len()), ""));

        debug!(base, total, max, pieces = pieces.len(), "split value into pieces");
        Ok(pieces)
    }

    /// Returns the configuration used by this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Returns the measure used by this splitter.
    pub fn measure(&self) -> &M {
        &self.measure
    }
}

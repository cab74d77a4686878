//! Configuration for splitting behavior.
//!
//! - [`SplitConfig`] - Per-piece encoded size limit

use crate::error::SplitError;

/// Default maximum encoded size of one piece (3180).
///
/// Measured with [`PercentEncoded`](crate::PercentEncoded), this leaves room
/// for the cookie name and its attributes under the common 4096-byte browser
/// limit.
pub const DEFAULT_MAX_ENCODED_SIZE: usize = 3180;

/// Configuration for splitting values into pieces.
///
/// The limit is expressed in the units of the [`Measure`](crate::Measure)
/// the splitter is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    max_encoded_size: usize,
}

impl SplitConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if `max_encoded_size` is zero.
    pub fn new(max_encoded_size: usize) -> Result<Self, SplitError> {
        if max_encoded_size == 0 {
            return Err(SplitError::InvalidConfig {
                message: "max_encoded_size must be non-zero",
            });
        }

        Ok(Self { max_encoded_size })
    }

    /// Sets the maximum encoded size of one piece.
    pub fn with_max_encoded_size(mut self, size: usize) -> Self {
        self.max_encoded_size = size;
        self
    }

    /// Returns the maximum encoded size of one piece.
    pub fn max_encoded_size(&self) -> usize {
        self.max_encoded_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), SplitError> {
        Self::new(self.max_encoded_size).map(|_| ())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_encoded_size: DEFAULT_MAX_ENCODED_SIZE,
        }
    }
}

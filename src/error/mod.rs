//! Error types for cookie-chunker.
//!
//! Only splitting can fail on its own. Reassembly errors are whatever the
//! caller's lookup returns, passed through untouched.

use std::fmt;

/// Errors that can occur while configuring or running the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A single code point does not fit in an otherwise empty piece.
    CodePointTooLarge {
        /// The code point that could not be placed.
        code_point: char,
        /// Name of the piece it was meant for.
        piece: String,
        /// Encoded size the piece would need.
        required: usize,
        /// The configured maximum encoded size.
        max: usize,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            SplitError::CodePointTooLarge {
                code_point,
                piece,
                required,
                max,
            } => write!(
                f,
                "code point {:?} does not fit in piece {}: needs {} (max {})",
                code_point, piece, required, max
            ),
        }
    }
}

impl std::error::Error for SplitError {}

//! Piece types.
//!
//! - [`Piece`] - Named fragment with its value
//! - [`PieceName`] - Parsed `<base>` / `<base>.<index>` name

mod data;
mod name;

pub use data::Piece;
pub use name::{PieceName, is_piece_of, stale_piece_names};

pub(crate) use name::piece_name;

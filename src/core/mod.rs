// Core module exports

// Board representation submodules
pub mod bitboard;
pub mod macros;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use bitboard::Bitboard;
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::{Direction, PieceType, SquareAddError};

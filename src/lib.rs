//! # Attackgen
//!
//! Precomputed attack bitboards for an 8x8 board.
//!
//! For every source square, the crate computes the set of squares reachable
//! by knight, king, bishop and rook on an otherwise empty board, encodes each
//! set as a 64-bit mask, and emits the resulting tables as a Rust source
//! artifact for an external move generator to embed.
pub mod core;
pub mod emit;
pub mod tables;

pub use crate::core::{Bitboard, Direction, File, PieceType, Rank, Square};

//! Precomputed per-square reachability tables for the four piece types.

mod init;
pub mod lookup;

pub use lookup::{
    BISHOP_RAY_DIRS, RAY_COUNT, ROOK_RAY_DIRS, bishop_ray, king_attack, knight_attack, rook_ray,
};

//! # Module: `lookup`
//!
//! The four precomputed tables and their accessors.
//!
//! ## Overview
//!
//! - `KNIGHT_ATTACKS`, `KING_ATTACKS`: one mask per source square, the
//!   squares reachable by a single fixed-offset step.
//! - `BISHOP_RAYS`, `ROOK_RAYS`: one mask per (direction, source square),
//!   the unobstructed ray in that direction. Directions are stored
//!   separately in their declared order so a consumer can index or union
//!   them as it sees fit.
//!
//! All tables are built by `const fn` initializers and never change at
//! runtime.

use super::init::{init_ray_table, init_step_attacks};
use crate::core::{Bitboard, Direction, Square};

/******************************************\
|==========================================|
|              Type Definitions            |
|==========================================|
\******************************************/

/// Attack table for a single piece type indexed by square
pub(crate) type AttackTable = [Bitboard; Square::NUM];
/// Ray tables for a sliding piece, indexed by direction then square
pub(crate) type RayTable = [AttackTable; RAY_COUNT];

/// Number of ray directions per sliding piece
pub const RAY_COUNT: usize = 4;

/******************************************\
|==========================================|
|              Direction Sets              |
|==========================================|
\******************************************/

use Direction::*;

/// Rook ray directions, in declared (emission) order.
pub const ROOK_RAY_DIRS: [Direction; RAY_COUNT] = [E, N, W, S];

/// Bishop ray directions, in declared (emission) order.
pub const BISHOP_RAY_DIRS: [Direction; RAY_COUNT] = [SE, NE, NW, SW];

/// The eight knight offsets.
const KNIGHT_DIRS: [Direction; 8] = [NNE, NNW, NEE, NWW, SEE, SWW, SSE, SSW];

/// The eight king steps.
const KING_DIRS: [Direction; 8] = [N, NE, NW, E, W, SE, SW, S];

/******************************************\
|==========================================|
|              Attack Tables               |
|==========================================|
\******************************************/

/// Precomputed knight attacks, indexed by `[Square]`.
static KNIGHT_ATTACKS: AttackTable = init_step_attacks(&KNIGHT_DIRS);

/// Precomputed king attacks, indexed by `[Square]`.
static KING_ATTACKS: AttackTable = init_step_attacks(&KING_DIRS);

/// Precomputed bishop rays, indexed by `[Direction order][Square]`.
static BISHOP_RAYS: RayTable = init_ray_table(BISHOP_RAY_DIRS);

/// Precomputed rook rays, indexed by `[Direction order][Square]`.
static ROOK_RAYS: RayTable = init_ray_table(ROOK_RAY_DIRS);

/******************************************\
|==========================================|
|               Get Attacks                |
|==========================================|
\******************************************/

/// Squares a knight on `sq` attacks.
#[inline]
pub fn knight_attack(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Squares a king on `sq` attacks.
#[inline]
pub fn king_attack(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// The unobstructed bishop ray from `sq` in direction `BISHOP_RAY_DIRS[ray]`.
#[inline]
pub fn bishop_ray(ray: usize, sq: Square) -> Bitboard {
    BISHOP_RAYS[ray][sq.index()]
}

/// The unobstructed rook ray from `sq` in direction `ROOK_RAY_DIRS[ray]`.
#[inline]
pub fn rook_ray(ray: usize, sq: Square) -> Bitboard {
    ROOK_RAYS[ray][sq.index()]
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

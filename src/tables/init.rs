//! # Module: `init`
//!
//! Compile-time builders for the attack tables. Two generators cover the
//! four piece types: a single-step fold for the fixed-offset pieces (knight,
//! king) and a per-direction ray walk for the sliding pieces (bishop, rook).

use super::lookup::{AttackTable, RAY_COUNT, RayTable};
use crate::core::{Bitboard, Direction, Square};

/// Builds the attack table for a fixed-offset piece from its direction set.
///
/// Each table entry is the union of one single-square shift per direction;
/// shifting drops any step that leaves the board, which is the entire
/// in-bounds filter. The source bit is cleared afterwards so the invariant
/// that a square never reaches itself holds no matter what direction set is
/// passed in.
pub(super) const fn init_step_attacks(dirs: &[Direction]) -> AttackTable {
    let mut attacks = [Bitboard::EMPTY; Square::NUM];

    let mut i = 0;
    while i < Square::NUM {
        let sq = unsafe { Square::from_unchecked(i as u8) };
        let sq_bb = sq.bb();

        let mut j = 0;
        while j < dirs.len() {
            attacks[i].0 |= sq_bb.shift(dirs[j]).0;
            j += 1;
        }

        attacks[i].clear(sq);
        i += 1;
    }

    attacks
}

/// Walks one unobstructed ray from `sq` in `dir`, marking every square
/// visited before the walk leaves the board. The source square is never
/// marked: the walk starts with a step away from it.
pub(super) const fn ray(sq: Square, dir: Direction) -> Bitboard {
    let mut bb = Bitboard::EMPTY;

    let mut from = sq;
    loop {
        from = match from.add(dir) {
            Ok(next) => next,
            Err(_) => break,
        };
        bb.set(from);
    }

    bb
}

/// Builds the per-direction ray tables for a sliding piece. The outer index
/// follows the order of `dirs`; rays are kept separate, not unioned.
pub(super) const fn init_ray_table(dirs: [Direction; RAY_COUNT]) -> RayTable {
    let mut table = [[Bitboard::EMPTY; Square::NUM]; RAY_COUNT];

    let mut d = 0;
    while d < RAY_COUNT {
        let mut i = 0;
        while i < Square::NUM {
            table[d][i] = ray(unsafe { Square::from_unchecked(i as u8) }, dirs[d]);
            i += 1;
        }
        d += 1;
    }

    table
}

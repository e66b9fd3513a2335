//! # Module: `emit`
//!
//! Formats the precomputed tables as Rust source code and writes the
//! artifact file.
//!
//! The encoding convention lives entirely in this module: every mask is
//! written as a binary literal of exactly 64 digits, most significant bit
//! first, so the digit for square 63 appears first in the literal and the
//! digit for square 0 last. Consumers indexing the emitted arrays must use
//! the same `rank * 8 + file` square encoding.
//!
//! The artifact starts with a timestamped do-not-edit prelude; everything
//! after the prelude is produced by [`render_tables`] and is byte-identical
//! across runs.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::core::{Bitboard, PieceType, Square};
use crate::tables::{RAY_COUNT, bishop_ray, king_attack, knight_attack, rook_ray};

/// Name of the emitted artifact file.
pub const ARTIFACT_NAME: &str = "attack_tables.rs";

/******************************************\
|==========================================|
|           Literal Formatting             |
|==========================================|
\******************************************/

/// Formats one mask as a 64-digit binary literal, square 63 first.
fn format_mask(bb: Bitboard) -> String {
    format!("0b{:064b}", bb.0)
}

/// Formats a fixed-offset piece's table as one `[u64; 64]` declaration,
/// squares 0..63 in increasing order.
fn format_attack_table(name: &str, attack: impl Fn(Square) -> Bitboard) -> String {
    let items = Square::iter()
        .map(|sq| format_mask(attack(sq)))
        .collect::<Vec<_>>()
        .join(",\n    ");

    format!(
        "pub static {}: [u64; {}] = [\n    {},\n];\n",
        name,
        Square::NUM,
        items
    )
}

/// Formats a sliding piece's rays as one `[[u64; 64]; 4]` declaration,
/// directions in declared order, squares 0..63 within each direction.
fn format_ray_table(name: &str, ray: impl Fn(usize, Square) -> Bitboard) -> String {
    let groups = (0..RAY_COUNT)
        .map(|d| {
            let items = Square::iter()
                .map(|sq| format_mask(ray(d, sq)))
                .collect::<Vec<_>>()
                .join(",\n        ");
            format!("    [\n        {},\n    ]", items)
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "pub static {}: [[u64; {}]; {}] = [\n{},\n];\n",
        name,
        Square::NUM,
        RAY_COUNT,
        groups
    )
}

/******************************************\
|==========================================|
|            Artifact Rendering            |
|==========================================|
\******************************************/

/// Renders the data-bearing portion of the artifact: the four table
/// declarations, one per piece type, in declaration order of [`PieceType`].
/// Deterministic; repeated calls return byte-identical strings.
pub fn render_tables() -> String {
    let mut code = String::new();

    for pt in PieceType::iter() {
        let decl = match pt {
            PieceType::Knight => format_attack_table("KNIGHT_ATTACKS", knight_attack),
            PieceType::King => format_attack_table("KING_ATTACKS", king_attack),
            PieceType::Bishop => format_ray_table("BISHOP_RAYS", bishop_ray),
            PieceType::Rook => format_ray_table("ROOK_RAYS", rook_ray),
        };
        code.push_str(&decl);
        code.push('\n');
    }

    code
}

/// The generated-file header. Carries the only run-dependent bytes of the
/// artifact (the timestamp), kept out of the data portion.
fn prelude() -> String {
    format!(
        "// DO NOT EDIT BY HAND. Generated by attackgen at {}.\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Writes the complete artifact (prelude + tables) to `out`.
pub fn write_artifact<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", prelude())?;
    write!(out, "{}", render_tables())?;
    Ok(())
}

/// Creates the artifact file in the working directory, writes it in full and
/// flushes it. Any failure aborts the run; a partial file is not valid
/// output and is simply regenerated by the next run.
pub fn generate_file() -> io::Result<()> {
    println!("[attackgen] writing {}...", ARTIFACT_NAME);

    let mut file = BufWriter::new(File::create(ARTIFACT_NAME)?);
    write_artifact(&mut file)?;
    file.flush()?;

    println!("[attackgen] done.");
    Ok(())
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    /// Pulls every binary literal out of rendered code, in emission order.
    fn literals(code: &str) -> Vec<u64> {
        code.split("0b")
            .skip(1)
            .map(|chunk| {
                let digits = &chunk[..64];
                assert!(
                    digits.bytes().all(|b| b == b'0' || b == b'1'),
                    "non-binary digit within the first 64 characters: {}",
                    digits
                );
                // The 65th character must terminate the literal
                assert!(matches!(chunk.as_bytes()[64], b',' | b'\n'));
                u64::from_str_radix(digits, 2).unwrap()
            })
            .collect()
    }

    fn in_bounds(v: i32) -> bool {
        (0..8).contains(&v)
    }

    /// Brute-force fixed-offset simulation over (rank, file) coordinates.
    fn simulate_steps(sq: usize, deltas: &[(i32, i32)]) -> u64 {
        let (rank, file) = (sq as i32 / 8, sq as i32 % 8);
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let (r, f) = (rank + dr, file + df);
            if in_bounds(r) && in_bounds(f) {
                mask |= 1u64 << (r * 8 + f);
            }
        }
        mask & !(1u64 << sq)
    }

    /// Brute-force ray simulation over (rank, file) coordinates.
    fn simulate_ray(sq: usize, (dr, df): (i32, i32)) -> u64 {
        let (mut rank, mut file) = (sq as i32 / 8, sq as i32 % 8);
        let mut mask = 0u64;
        loop {
            rank += dr;
            file += df;
            if !in_bounds(rank) || !in_bounds(file) {
                break;
            }
            mask |= 1u64 << (rank * 8 + file);
        }
        mask
    }

    /// King deltas as the full cross product minus the zero pair.
    fn king_deltas() -> Vec<(i32, i32)> {
        let d = [-1, 0, 1];
        d.iter()
            .flat_map(|&dr| d.iter().map(move |&df| (dr, df)))
            .filter(|&(dr, df)| (dr, df) != (0, 0))
            .collect()
    }

    /// Knight deltas as the cross product filtered to |dr| != |df|.
    fn knight_deltas() -> Vec<(i32, i32)> {
        let d: [i32; 4] = [-1, 1, 2, -2];
        d.iter()
            .flat_map(|&dr| d.iter().map(move |&df| (dr, df)))
            .filter(|&(dr, df)| dr.abs() != df.abs())
            .collect()
    }

    const ROOK_DELTAS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    const BISHOP_DELTAS: [(i32, i32); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_tables(), render_tables());
    }

    #[test]
    fn test_declaration_order() {
        let code = render_tables();
        let knight = code.find("KNIGHT_ATTACKS").unwrap();
        let king = code.find("KING_ATTACKS").unwrap();
        let bishop = code.find("BISHOP_RAYS").unwrap();
        let rook = code.find("ROOK_RAYS").unwrap();
        assert!(knight < king && king < bishop && bishop < rook);
    }

    #[test]
    fn test_literal_count_and_width() {
        // 64 knight + 64 king + 4 * 64 bishop + 4 * 64 rook
        let code = render_tables();
        assert_eq!(literals(&code).len(), 640);
    }

    #[test]
    fn test_literals_match_geometric_simulation() {
        let values = literals(&render_tables());
        let knight = knight_deltas();
        let king = king_deltas();

        for sq in 0..64 {
            assert_eq!(
                values[sq],
                simulate_steps(sq, &knight),
                "knight mask mismatch at square {}",
                sq
            );
            assert_eq!(
                values[64 + sq],
                simulate_steps(sq, &king),
                "king mask mismatch at square {}",
                sq
            );
            for d in 0..4 {
                assert_eq!(
                    values[128 + d * 64 + sq],
                    simulate_ray(sq, BISHOP_DELTAS[d]),
                    "bishop ray {} mismatch at square {}",
                    d,
                    sq
                );
                assert_eq!(
                    values[384 + d * 64 + sq],
                    simulate_ray(sq, ROOK_DELTAS[d]),
                    "rook ray {} mismatch at square {}",
                    d,
                    sq
                );
            }
        }
    }

    #[test]
    fn test_literal_bit_order() {
        // The first digit of a literal is square 63, the last square 0.
        // A knight on h8 (square 63) reaches f7 (53) and g6 (46) only.
        let code = render_tables();
        let h8_literal = code
            .lines()
            .filter(|line| line.trim_start().starts_with("0b"))
            .nth(63)
            .unwrap()
            .trim()
            .trim_end_matches(',');

        let digits = &h8_literal[2..];
        assert_eq!(digits.len(), 64);
        for sq in 0..64 {
            let digit = digits.as_bytes()[63 - sq] as char;
            let expected = if sq == 53 || sq == 46 { '1' } else { '0' };
            assert_eq!(digit, expected, "digit for square {} in h8 knight mask", sq);
        }
    }

    #[test]
    fn test_artifact_layout() {
        let mut buf = Vec::new();
        write_artifact(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // One prelude line, then the data portion untouched
        assert!(text.starts_with("// DO NOT EDIT BY HAND."));
        let body = text.splitn(3, '\n').nth(2).unwrap();
        assert_eq!(body, render_tables());
        assert!(!render_tables().contains("DO NOT EDIT"));
    }
}

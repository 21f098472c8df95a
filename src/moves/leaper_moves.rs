//! Precomputed knight and king target masks.
//!
//! Both pieces jump to a fixed set of offsets regardless of occupancy, so one
//! const table per piece covers every square.

use crate::game_state::chess_types::Square;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = build_leaper_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = build_leaper_table(&KING_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

const fn build_leaper_table(offsets: &[(i32, i32); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let target_file = file + offsets[i].0;
            let target_rank = rank + offsets[i].1;
            if target_file >= 0 && target_file < 8 && target_rank >= 0 && target_rank < 8 {
                targets |= 1u64 << (target_rank * 8 + target_file);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, knight_attacks};
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_center_and_corner() {
        let d4 = Square::new(3, 3).expect("d4");
        assert_eq!(knight_attacks(d4).count_ones(), 8);
        assert_eq!(knight_attacks(Square::A1).count_ones(), 2);
        let b3 = Square::new(1, 2).expect("b3");
        assert_ne!(knight_attacks(Square::A1) & b3.bit(), 0);
    }

    #[test]
    fn king_targets_from_corner_and_edge() {
        assert_eq!(king_attacks(Square::A1).count_ones(), 3);
        assert_eq!(king_attacks(Square::E1).count_ones(), 5);
        let e4 = Square::new(4, 3).expect("e4");
        assert_eq!(king_attacks(e4).count_ones(), 8);
    }
}

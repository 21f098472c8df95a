//! Occupancy-aware ray attacks for bishops, rooks and queens.
//!
//! A ray includes the first occupied square it meets (a potential capture or
//! an own-piece block, which the caller masks out) and stops there.

use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = square.offset(file_step, rank_step);

    while let Some(target) = cursor {
        attacks |= target.bit();
        if occupancy & target.bit() != 0 {
            break;
        }
        cursor = target.offset(file_step, rank_step);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, queen_attacks, rook_attacks};
    use crate::game_state::chess_types::Square;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn empty_board_ray_counts() {
        assert_eq!(rook_attacks(sq("d4"), 0).count_ones(), 14);
        assert_eq!(bishop_attacks(sq("d4"), 0).count_ones(), 13);
        assert_eq!(queen_attacks(sq("d4"), 0).count_ones(), 27);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let attacks = rook_attacks(Square::A1, sq("a4").bit());
        assert_ne!(attacks & sq("a4").bit(), 0);
        assert_eq!(attacks & sq("a5").bit(), 0);
        assert_ne!(attacks & Square::H1.bit(), 0);
    }

    #[test]
    fn queen_attacks_stop_at_first_blocker_per_ray() {
        let blockers = sq("d6").bit() | sq("g4").bit();
        let attacks = queen_attacks(sq("d4"), blockers);
        assert_ne!(attacks & sq("d6").bit(), 0);
        assert_eq!(attacks & sq("d7").bit(), 0);
        assert_ne!(attacks & sq("g4").bit(), 0);
        assert_eq!(attacks & sq("h4").bit(), 0);
    }
}
